use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::domain::center::ui::{CenterDetail, CenterList, CenterUpdate};
use crate::domain::center_employee::ui::{
    CenterEmployeeDetail, CenterEmployeeList, CenterEmployeeUpdate,
};
use crate::domain::center_image::ui::{CenterImageDetail, CenterImageList, CenterImageUpdate};
use crate::domain::designation::ui::{DesignationDetail, DesignationList, DesignationUpdate};
use crate::domain::district::ui::{DistrictDetail, DistrictList, DistrictUpdate};
use crate::domain::division::ui::{DivisionDetail, DivisionList, DivisionUpdate};
use crate::domain::employee::ui::{EmployeeDetail, EmployeeList, EmployeeUpdate};
use crate::domain::navigation::ui::{NavigationDetail, NavigationList, NavigationUpdate};
use crate::domain::post::ui::{PostDetail, PostList, PostUpdate};
use crate::domain::post_comment::ui::{PostCommentDetail, PostCommentList, PostCommentUpdate};
use crate::domain::post_photo::ui::{PostPhotoDetail, PostPhotoList, PostPhotoUpdate};
use crate::domain::upazila::ui::{UpazilaDetail, UpazilaList, UpazilaUpdate};
use crate::layout::home::HomePage;
use crate::layout::not_found::NotFoundPage;

/// Four routes per entity: list, create-new, view-by-id, edit-by-id.
/// Edit and view routes resolve their entity before the form renders.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />

            <Route path=path!("/navigation") view=NavigationList />
            <Route path=path!("/navigation/new") view=NavigationUpdate />
            <Route path=path!("/navigation/:id/view") view=NavigationDetail />
            <Route path=path!("/navigation/:id/edit") view=NavigationUpdate />

            <Route path=path!("/division") view=DivisionList />
            <Route path=path!("/division/new") view=DivisionUpdate />
            <Route path=path!("/division/:id/view") view=DivisionDetail />
            <Route path=path!("/division/:id/edit") view=DivisionUpdate />

            <Route path=path!("/district") view=DistrictList />
            <Route path=path!("/district/new") view=DistrictUpdate />
            <Route path=path!("/district/:id/view") view=DistrictDetail />
            <Route path=path!("/district/:id/edit") view=DistrictUpdate />

            <Route path=path!("/upazila") view=UpazilaList />
            <Route path=path!("/upazila/new") view=UpazilaUpdate />
            <Route path=path!("/upazila/:id/view") view=UpazilaDetail />
            <Route path=path!("/upazila/:id/edit") view=UpazilaUpdate />

            <Route path=path!("/center") view=CenterList />
            <Route path=path!("/center/new") view=CenterUpdate />
            <Route path=path!("/center/:id/view") view=CenterDetail />
            <Route path=path!("/center/:id/edit") view=CenterUpdate />

            <Route path=path!("/designation") view=DesignationList />
            <Route path=path!("/designation/new") view=DesignationUpdate />
            <Route path=path!("/designation/:id/view") view=DesignationDetail />
            <Route path=path!("/designation/:id/edit") view=DesignationUpdate />

            <Route path=path!("/employee") view=EmployeeList />
            <Route path=path!("/employee/new") view=EmployeeUpdate />
            <Route path=path!("/employee/:id/view") view=EmployeeDetail />
            <Route path=path!("/employee/:id/edit") view=EmployeeUpdate />

            <Route path=path!("/center-employee") view=CenterEmployeeList />
            <Route path=path!("/center-employee/new") view=CenterEmployeeUpdate />
            <Route path=path!("/center-employee/:id/view") view=CenterEmployeeDetail />
            <Route path=path!("/center-employee/:id/edit") view=CenterEmployeeUpdate />

            <Route path=path!("/center-images") view=CenterImageList />
            <Route path=path!("/center-images/new") view=CenterImageUpdate />
            <Route path=path!("/center-images/:id/view") view=CenterImageDetail />
            <Route path=path!("/center-images/:id/edit") view=CenterImageUpdate />

            <Route path=path!("/post") view=PostList />
            <Route path=path!("/post/new") view=PostUpdate />
            <Route path=path!("/post/:id/view") view=PostDetail />
            <Route path=path!("/post/:id/edit") view=PostUpdate />

            <Route path=path!("/post-photo") view=PostPhotoList />
            <Route path=path!("/post-photo/new") view=PostPhotoUpdate />
            <Route path=path!("/post-photo/:id/view") view=PostPhotoDetail />
            <Route path=path!("/post-photo/:id/edit") view=PostPhotoUpdate />

            <Route path=path!("/post-comment") view=PostCommentList />
            <Route path=path!("/post-comment/new") view=PostCommentUpdate />
            <Route path=path!("/post-comment/:id/view") view=PostCommentDetail />
            <Route path=path!("/post-comment/:id/edit") view=PostCommentUpdate />

            <Route path=path!("/404") view=NotFoundPage />
        </Routes>
    }
}
