use serde::{Deserialize, Serialize};

/// Standard wire shape of every paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages at the response's page size; 0 when limit is 0.
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let page = Paginated::<u8> {
            items: vec![],
            total: 41,
            skip: 0,
            limit: 20,
        };
        assert_eq!(page.page_count(), 3);
        assert!(page.is_empty());
    }

    #[test]
    fn zero_limit_has_no_pages() {
        let page = Paginated::<u8> {
            items: vec![],
            total: 10,
            skip: 0,
            limit: 0,
        };
        assert_eq!(page.page_count(), 0);
    }
}
