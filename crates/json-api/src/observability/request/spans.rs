//! Route labels for spans and metrics.

use uuid::Uuid;

/// Replace UUID path segments with `{uuid}` so labels stay low-cardinality.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            label.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            label.push_str("{uuid}");
        } else {
            label.push_str(segment);
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        let cart = Uuid::now_v7();
        let product = Uuid::now_v7();

        assert_eq!(
            route_label(&format!("/carts/{cart}/items/{product}")),
            "/carts/{uuid}/items/{uuid}"
        );
    }

    #[test]
    fn plain_paths_are_kept() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/inventory/low-stock"), "/inventory/low-stock");
    }
}
