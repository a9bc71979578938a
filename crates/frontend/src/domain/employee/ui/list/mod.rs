use contracts::domain::common::QueryOptions;
use contracts::domain::employee::Employee;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::employee::api;
use crate::shared::icons::icon;
use crate::shared::navigation::confirm;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Employee>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().query(&QueryOptions::new().sort("fullName,asc")).await {
                Ok(employees) => {
                    set_items.set(employees);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let navigate = use_navigate();
    let handle_create_new = {
        let navigate = navigate.clone();
        move || navigate("/employee/new", Default::default())
    };
    let open_view = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/employee/{id}/view"), Default::default())
    };
    let open_edit = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/employee/{id}/edit"), Default::default())
    };

    let handle_delete = move |id: String| {
        if !confirm("Delete this employee?") {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().delete(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    fetch();

    view! {
        <section class="entity-list employee-list">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">"Employees"</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " New employee"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </Flex>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=220.0>"Full name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Bn full name"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Mobile"</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Designation"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items.get().into_iter().map(|employee| {
                        let id = employee.id.clone().unwrap_or_default();
                        let id_for_link = id.clone();
                        let id_for_edit = id.clone();
                        let id_for_delete = id.clone();
                        let open_view = open_view.clone();
                        let open_edit = open_edit.clone();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <a
                                            href="#"
                                            class="table__link"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                open_view(id_for_link.clone());
                                            }
                                        >
                                            {employee.full_name.clone().unwrap_or_default()}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{employee.bn_full_name.clone().unwrap_or_default()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{employee.mobile.clone().unwrap_or_default()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{employee.email.clone().unwrap_or_default()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{employee.designation.as_ref().and_then(|d| d.name.clone()).unwrap_or_default()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| open_edit(id_for_edit.clone())
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(id_for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </section>
    }
}
