/// Request parameters recognized by every list endpoint.
///
/// Replaces the loosely shaped request options of the upstream API client
/// with an explicit struct: paging, sort specs (`field,asc` / `field,desc`)
/// and free-form filter pairs, rendered in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
    pub filters: Vec<(String, String)>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Add a sort spec, e.g. `"name,asc"`. Repeated sorts are allowed and
    /// rendered as repeated `sort=` parameters.
    pub fn sort(mut self, spec: impl Into<String>) -> Self {
        self.sort.push(spec.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.size.is_none() && self.sort.is_empty() && self.filters.is_empty()
    }

    /// Render as ordered key/value pairs: filters, page, size, then sorts.
    /// Values are NOT percent-encoded here; the transport layer encodes.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self.filters.clone();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size".to_owned(), size.to_string()));
        }
        for spec in &self.sort {
            pairs.push(("sort".to_owned(), spec.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_render_no_pairs() {
        let options = QueryOptions::new();
        assert!(options.is_empty());
        assert!(options.to_query_pairs().is_empty());
    }

    #[test]
    fn test_pairs_keep_stable_order() {
        let options = QueryOptions::new()
            .filter("centerId.equals", "c-1")
            .page(2)
            .size(20)
            .sort("postDate,desc")
            .sort("id,asc");
        assert_eq!(
            options.to_query_pairs(),
            vec![
                ("centerId.equals".to_owned(), "c-1".to_owned()),
                ("page".to_owned(), "2".to_owned()),
                ("size".to_owned(), "20".to_owned()),
                ("sort".to_owned(), "postDate,desc".to_owned()),
                ("sort".to_owned(), "id,asc".to_owned()),
            ]
        );
    }
}
