use serde::{Deserialize, Serialize};

/// Spacing constants for fresh layouts
///
/// Tree mode spreads siblings evenly under their parent, one row per depth.
/// FSM mode places states on a grid in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Horizontal distance between tree siblings
    pub column_spacing: f64,

    /// Vertical distance between tree depths
    pub row_height: f64,

    /// States per grid row
    pub grid_columns: usize,

    pub grid_spacing_x: f64,
    pub grid_spacing_y: f64,

    /// Position of the tree root / first grid cell
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            column_spacing: 200.0,
            row_height: 120.0,
            grid_columns: 3,
            grid_spacing_x: 250.0,
            grid_spacing_y: 150.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl LayoutOptions {
    /// Grid width, never zero
    pub fn columns(&self) -> usize {
        self.grid_columns.max(1)
    }

    /// Horizontal offset of sibling `index` out of `count`, relative to the parent
    pub fn sibling_offset(&self, index: usize, count: usize) -> f64 {
        let center = (count.saturating_sub(1)) as f64 / 2.0;
        (index as f64 - center) * self.column_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_offsets_are_centered() {
        let layout = LayoutOptions::default();
        assert_eq!(layout.sibling_offset(0, 1), 0.0);
        assert_eq!(layout.sibling_offset(0, 2), -100.0);
        assert_eq!(layout.sibling_offset(1, 2), 100.0);
        assert_eq!(layout.sibling_offset(1, 3), 0.0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let layout: LayoutOptions = serde_json::from_str(r#"{ "rowHeight": 80 }"#).unwrap();
        assert_eq!(layout.row_height, 80.0);
        assert_eq!(layout.column_spacing, 200.0);
        assert_eq!(layout.grid_columns, 3);
    }

    #[test]
    fn test_zero_columns_is_clamped() {
        let layout = LayoutOptions {
            grid_columns: 0,
            ..LayoutOptions::default()
        };
        assert_eq!(layout.columns(), 1);
    }
}
