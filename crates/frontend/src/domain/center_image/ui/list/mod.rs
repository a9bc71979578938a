use contracts::domain::center_image::CenterImage;
use contracts::domain::common::QueryOptions;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::center_image::api;
use crate::shared::icons::icon;
use crate::shared::navigation::confirm;

#[component]
#[allow(non_snake_case)]
pub fn CenterImageList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CenterImage>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().query(&QueryOptions::new().sort("title,asc")).await {
                Ok(images) => {
                    set_items.set(images);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let navigate = use_navigate();
    let handle_create_new = {
        let navigate = navigate.clone();
        move || navigate("/center-images/new", Default::default())
    };
    let open_view = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/center-images/{id}/view"), Default::default())
    };
    let open_edit = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/center-images/{id}/edit"), Default::default())
    };

    // Visibility toggles straight from the list; only id and the flag go
    // over the wire (merge-patch).
    let toggle_show = move |id: String, checked: bool| {
        let patch = CenterImage {
            id: Some(id),
            show: checked,
            ..CenterImage::default()
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().partial_update(&patch).await {
                Ok(_) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: String| {
        if !confirm("Delete this center image?") {
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
        <section class="entity-list center-image-list">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">"Center images"</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " New center image"
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
                        <TableHeaderCell resizable=true min_width=220.0>"Title"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Description"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Show"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Center"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items.get().into_iter().map(|image| {
                        let id = image.id.clone().unwrap_or_default();
                        let id_for_link = id.clone();
                        let id_for_edit = id.clone();
                        let id_for_delete = id.clone();
                        let id_for_show = id.clone();
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
                                            {image.title.clone().unwrap_or_default()}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{image.description.clone().unwrap_or_default()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <input
                                            type="checkbox"
                                            prop:checked=image.show
                                            on:change=move |ev| {
                                                toggle_show(id_for_show.clone(), event_target_checked(&ev));
                                            }
                                        />
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{image.center.as_ref().and_then(|c| c.name.clone()).unwrap_or_default()}</TableCellLayout>
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
