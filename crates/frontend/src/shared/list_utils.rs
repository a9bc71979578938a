//! Client-side sorting helpers for list pages.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Row types that support sorting by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the given field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(field: &str, current_field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Click handler that toggles direction on the active column and switches
/// column otherwise.
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => self.0.cmp(&other.0),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list_descending() {
        let mut rows = vec![Row(1), Row(3), Row(2)];
        sort_list(&mut rows, "value", false);
        let values: Vec<i32> = rows.iter().map(|r| r.0).collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_indicator_tracks_active_column() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "grade", true), " ⇅");
    }
}
