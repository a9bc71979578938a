use contracts::domain::common::QueryOptions;
use contracts::domain::post_photo::PostPhoto;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::post_photo::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::navigation::confirm;

#[component]
#[allow(non_snake_case)]
pub fn PostPhotoList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<PostPhoto>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().query(&QueryOptions::new().sort("sequence,asc")).await {
                Ok(photos) => {
                    set_items.set(photos);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let navigate = use_navigate();
    let handle_create_new = {
        let navigate = navigate.clone();
        move || navigate("/post-photo/new", Default::default())
    };
    let open_view = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/post-photo/{id}/view"), Default::default())
    };
    let open_edit = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/post-photo/{id}/edit"), Default::default())
    };

    let handle_delete = move |id: String| {
        if !confirm("Delete this post photo?") {
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
        <section class="entity-list post-photo-list">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">"Post photos"</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " New post photo"
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
                        <TableHeaderCell min_width=90.0>"Sequence"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Uploaded on"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Post"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Uploaded by"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items.get().into_iter().map(|photo| {
                        let id = photo.id.clone().unwrap_or_default();
                        let id_for_link = id.clone();
                        let id_for_edit = id.clone();
                        let id_for_delete = id.clone();
                        let open_view = open_view.clone();
                        let open_edit = open_edit.clone();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{photo.sequence.map(|s| s.to_string()).unwrap_or_default()}</TableCellLayout>
                                </TableCell>
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
                                            {photo.title.clone().unwrap_or_default()}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{photo.uploaded_on.as_ref().map(format_datetime).unwrap_or_default()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{photo.post.as_ref().and_then(|p| p.title.clone()).unwrap_or_default()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{photo.uploaded_by.as_ref().and_then(|e| e.full_name.clone()).unwrap_or_default()}</TableCellLayout>
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
