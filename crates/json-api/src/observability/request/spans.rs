//! HTTP route label helpers.

/// Collapse numeric path segments so routes make low-cardinality labels.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            label.push('/');
        }

        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            label.push_str("{id}");
        } else {
            label.push_str(segment);
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::route_label;

    #[test]
    fn numeric_segments_become_placeholders() {
        assert_eq!(route_label("/cart/checkout/42"), "/cart/checkout/{id}");
        assert_eq!(route_label("/cart/update/7"), "/cart/update/{id}");
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/cart"), "/cart");
        assert_eq!(route_label("/cart/clear"), "/cart/clear");
    }
}
