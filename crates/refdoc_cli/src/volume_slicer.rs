//! Built-in demo class
//!
//! A small volume slicer documented through the refdoc macros and
//! registered in the class inventory, so `refdoc` has something to render
//! without a table file.

use refdoc_macro::{refdoc_class, refdoc_methods};

/// Documentation for the free helper that accompanies the slicer; appended
/// after the class reference.
pub const SLICER_COMPANION_DOC: &str = "\
**function `discrete_colors(n: usize) -> Vec<String>`**

Produce `n` evenly spaced hex colors, for use as overlay colors
when several masks are shown on top of one slicer.";

/// A slicer to show 2D slices of a 3D volume.
///
/// Arguments:
///
/// * `volume`: the voxel values, in z-y-x order.
/// * `shape`: the `(z, y, x)` extent of the volume.
/// * `axis`: the dimension to slice in. Default 0.
///
/// Example:
///
/// ```text
/// let slicer = VolumeSlicer::new(volume, (64, 128, 128), 0);
/// let image = slicer.slice(32);
/// ```
#[refdoc_class]
pub struct VolumeSlicer {
    volume: Vec<f32>,
    shape: (usize, usize, usize),
    axis: usize,
    /// The index of the slice currently shown.
    pub index: usize,
}

#[refdoc_methods]
impl VolumeSlicer {
    /// Create a slicer. Axes above 2 are clamped to 2.
    pub fn new(volume: Vec<f32>, shape: (usize, usize, usize), axis: usize) -> Self {
        Self {
            volume,
            shape,
            axis: axis.min(2),
            index: 0,
        }
    }

    /// Get the 2D slice at the given index along the slicer's axis.
    ///
    /// The slice is returned row-major; an index past the end yields
    /// an empty vector.
    pub fn slice(&self, index: usize) -> Vec<f32> {
        let (nz, ny, nx) = self.shape;
        if index >= self.nslices() {
            return Vec::new();
        }
        let at = |z: usize, y: usize, x: usize| {
            self.volume
                .get((z * ny + y) * nx + x)
                .copied()
                .unwrap_or_default()
        };
        match self.axis {
            0 => (0..ny)
                .flat_map(|y| (0..nx).map(move |x| (y, x)))
                .map(|(y, x)| at(index, y, x))
                .collect(),
            1 => (0..nz)
                .flat_map(|z| (0..nx).map(move |x| (z, x)))
                .map(|(z, x)| at(z, index, x))
                .collect(),
            _ => (0..nz)
                .flat_map(|z| (0..ny).map(move |y| (z, y)))
                .map(|(z, y)| at(z, y, index))
                .collect(),
        }
    }

    /// Move to another slice; out-of-range indices are clamped.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.nslices().saturating_sub(1));
    }

    /// The axis to slice.
    #[refdoc(property)]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The number of slices for this slicer.
    #[refdoc(property)]
    pub fn nslices(&self) -> usize {
        match self.axis {
            0 => self.shape.0,
            1 => self.shape.1,
            _ => self.shape.2,
        }
    }

    #[doc(hidden)]
    pub fn voxel_count(&self) -> usize {
        self.volume.len()
    }
}

refdoc_ir::register_class!(VolumeSlicer);

#[cfg(test)]
mod tests {
    use super::*;
    use refdoc_ir::Documented;

    fn cube() -> VolumeSlicer {
        // 2 x 2 x 3 volume with values 0..12
        VolumeSlicer::new((0..12).map(|v| v as f32).collect(), (2, 2, 3), 0)
    }

    #[test]
    fn test_slice_along_each_axis() {
        let mut slicer = cube();
        assert_eq!(slicer.slice(1), vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);

        slicer.axis = 1;
        assert_eq!(slicer.slice(0), vec![0.0, 1.0, 2.0, 6.0, 7.0, 8.0]);

        slicer.axis = 2;
        assert_eq!(slicer.slice(2), vec![2.0, 5.0, 8.0, 11.0]);
        assert!(slicer.slice(3).is_empty());
    }

    #[test]
    fn test_set_index_clamps() {
        let mut slicer = cube();
        slicer.set_index(10);
        assert_eq!(slicer.index, 1);
    }

    #[test]
    fn test_table() {
        let class = VolumeSlicer::class_symbol();
        assert_eq!(
            class.constructor.as_deref(),
            Some("(volume: Vec<f32>, shape: (usize, usize, usize), axis: usize)")
        );
        let names: Vec<_> = class.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["index", "slice", "set_index", "axis", "nslices"]);
    }

    #[test]
    fn test_registered_in_inventory() {
        let registry = refdoc_ir::ClassRegistry::from_inventory();
        assert!(registry.find("VolumeSlicer").is_some());
    }
}
