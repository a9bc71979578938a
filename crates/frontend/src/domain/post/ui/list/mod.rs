use std::cmp::Ordering;

use contracts::domain::common::QueryOptions;
use contracts::domain::post::Post;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::post::api;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, sort_list, Sortable};
use crate::shared::navigation::confirm;

#[derive(Clone, Debug)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub post_date: String,
    pub publish: bool,
    pub published_on: String,
    pub center: String,
    pub employee: String,
}

impl From<Post> for PostRow {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.unwrap_or_default(),
            title: post.title.unwrap_or_default(),
            post_date: post.post_date.as_ref().map(format_date).unwrap_or_default(),
            publish: post.publish,
            published_on: post
                .published_on
                .as_ref()
                .map(format_datetime)
                .unwrap_or_default(),
            center: post
                .center
                .and_then(|center| center.name)
                .unwrap_or_else(|| "-".to_string()),
            employee: post
                .employee
                .and_then(|employee| employee.full_name)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl Sortable for PostRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            "post_date" => self.post_date.cmp(&other.post_date),
            "publish" => self.publish.cmp(&other.publish),
            "published_on" => self.published_on.cmp(&other.published_on),
            "center" => self.center.to_lowercase().cmp(&other.center.to_lowercase()),
            "employee" => self.employee.to_lowercase().cmp(&other.employee.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PostList() -> impl IntoView {
    let (raw_items, set_raw_items) = signal::<Vec<PostRow>>(Vec::new());
    let (items, set_items) = signal::<Vec<PostRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let sort_field = RwSignal::new("post_date".to_string());
    let sort_ascending = RwSignal::new(false);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().query(&QueryOptions::new().sort("postDate,desc")).await {
                Ok(posts) => {
                    set_raw_items.set(posts.into_iter().map(PostRow::from).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    Effect::new(move |_| {
        let mut sorted = raw_items.get();
        sort_list(&mut sorted, &sort_field.get(), sort_ascending.get());
        set_items.set(sorted);
    });

    let navigate = use_navigate();
    let handle_create_new = {
        let navigate = navigate.clone();
        move || navigate("/post/new", Default::default())
    };
    let open_view = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/post/{id}/view"), Default::default())
    };
    let open_edit = {
        let navigate = navigate.clone();
        move |id: String| navigate(&format!("/post/{id}/edit"), Default::default())
    };

    let handle_delete = move |id: String| {
        if !confirm("Delete this post?") {
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
        <section class="entity-list post-list">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">"Posts"</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " New post"
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
                        <TableHeaderCell resizable=true min_width=220.0>
                            "Title"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("title", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("title", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=110.0>
                            "Post date"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("post_date", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("post_date", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=90.0>
                            "Published"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("publish", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("publish", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=150.0>
                            "Published on"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("published_on", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("published_on", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=160.0>
                            "Center"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("center", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("center", &sort_field.get(), sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=160.0>
                            "Employee"
                            <span
                                class="sort-toggle"
                                on:click=create_sort_toggle("employee", sort_field, sort_ascending)
                            >
                                {move || get_sort_indicator("employee", &sort_field.get(), sort_ascending.get())}
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
                                            {row.title}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.post_date}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{if row.publish { "Yes" } else { "No" }}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.published_on}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.center}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.employee}</TableCellLayout>
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
