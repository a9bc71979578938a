use std::cmp::Ordering;

use contracts::domain::common::QueryOptions;
use contracts::domain::division::Division;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::division::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, sort_list, Sortable};
use crate::shared::navigation::confirm;

#[derive(Clone, Debug)]
pub struct DivisionRow {
    pub id: String,
    pub name: String,
    pub bn_name: String,
    pub url: String,
}

impl From<Division> for DivisionRow {
    fn from(division: Division) -> Self {
        Self {
            id: division.id.unwrap_or_default(),
            name: division.name.unwrap_or_default(),
            bn_name: division.bn_name.unwrap_or_default(),
            url: division.url.unwrap_or_default(),
        }
    }
}

impl Sortable for DivisionRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "bn_name" => self.bn_name.cmp(&other.bn_name),
            "url" => self.url.to_lowercase().cmp(&other.url.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DivisionList() -> impl IntoView {
    let (raw_items, set_raw_items) = signal::<Vec<DivisionRow>>(Vec::new());
    let (items, set_items) = signal::<Vec<DivisionRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().query(&QueryOptions::new().sort("name,asc")).await {
                Ok(divisions) => {
                    set_raw_items.set(divisions.into_iter().map(DivisionRow::from).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    // Re-sort whenever the data or the sort parameters change
    Effect::new(move |_| {
        let mut sorted = raw_items.get();
        sort_list(&mut sorted, &sort_field.get(), sort_ascending.get());
        set_items.set(sorted);
    });

    let navigate = use_navigate();
    let handle_create_new = {
        let navigate = navigate.clone();
        move || navigate("/division/new", Default::default())
    };
    let open_view = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/division/{id}/view"), Default::default())
    };
    let open_edit = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/division/{id}/edit"), Default::default())
    };

    let handle_delete = move |id: String| {
        if !confirm("Delete this division?") {
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
        <section class="entity-list division-list">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">"Divisions"</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " New division"
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
                        <TableHeaderCell resizable=true min_width=200.0>
                            "Name"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("name", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("name", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>
                            "Bn name"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("bn_name", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("bn_name", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>
                            "Url"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("url", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("url", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items.get().into_iter().map(|row| {
                        let id_for_link = row.id.clone();
                        let id_for_edit = row.id.clone();
                        let id_for_delete = row.id.clone();
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
                                            {row.name}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.bn_name}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{row.url}</TableCellLayout>
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
