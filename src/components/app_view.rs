//! Defines the shared application view state.

#[derive(Debug, Clone, PartialEq)]
pub enum AppView {
    Home,
    CollectionDetail(i64),
    Series,
    SeriesDetail(i64),
    Chapter(i64),
    Login,
    Register,
    LibraryAdmin,
    Profile,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home => "Library",
        AppView::CollectionDetail(_) => "Collection",
        AppView::Series => "Series",
        AppView::SeriesDetail(_) => "Series",
        AppView::Chapter(_) => "Chapter",
        AppView::Login => "Sign In",
        AppView::Register => "Create Account",
        AppView::LibraryAdmin => "Manage Library",
        AppView::Profile => "Profile",
    }
}
