//! End-to-end tests: annotated Rust type -> metadata table -> Markdown page

use pretty_assertions::assert_eq;
use refdoc::{build_reference_document, RefDocBuilder, RefDocConfig};
use refdoc_ir::{Documented, MemberKind};
use refdoc_macro::{refdoc_class, refdoc_methods};

/// A slicer to show 2D slices of a 3D volume.
///
/// Arguments:
///
///   * volume: the 3D array to slice.
///   * axis: the dimension to slice in.
#[refdoc_class]
pub struct VolumeSlicer {
    /// The volume being sliced.
    pub volume: Vec<f32>,
    axis: u8,
    /// Scratch space, not part of the API.
    #[refdoc(skip)]
    pub scratch: Vec<u8>,
}

#[refdoc_methods]
impl VolumeSlicer {
    /// Create a new slicer.
    pub fn new(volume: Vec<f32>, axis: u8) -> Self {
        Self {
            volume,
            axis,
            scratch: Vec::new(),
        }
    }

    /// Get the slice at the given index.
    ///
    /// Returns a flat vector.
    pub fn slice(&self, index: usize) -> Vec<f32> {
        self.volume.iter().skip(index).take(1).copied().collect()
    }

    /// Reset the view.
    pub fn _reset(&mut self) {
        self.scratch.clear();
    }

    pub fn undocumented(&self) {}

    /// The axis to slice along.
    #[refdoc(property)]
    pub fn axis(&self) -> u8 {
        self.axis
    }

    /// Iterate over slice indices.
    #[refdoc(property)]
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.nslices()
    }

    fn nslices(&self) -> usize {
        self.volume.len()
    }
}

refdoc_ir::register_class!(VolumeSlicer);

#[test]
fn test_table_from_macros() {
    let class = VolumeSlicer::class_symbol();

    assert_eq!(class.name, "VolumeSlicer");
    assert_eq!(class.constructor.as_deref(), Some("(volume: Vec<f32>, axis: u8)"));

    let names: Vec<_> = class.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["volume", "slice", "_reset", "undocumented", "axis", "indices"]
    );

    let slice = class.find_member("slice").unwrap();
    assert_eq!(slice.kind, MemberKind::Method);
    assert_eq!(slice.signature.as_deref(), Some("(&self, index: usize) -> Vec<f32>"));

    let axis = class.find_member("axis").unwrap();
    assert_eq!(axis.kind, MemberKind::Property);
    assert_eq!(axis.return_type.as_deref(), Some("u8"));

    assert_eq!(class.find_member("indices").unwrap().return_type, None);
    assert_eq!(class.find_member("undocumented").unwrap().doc, None);
    assert!(class.find_member("nslices").is_none());
    assert!(class.find_member("scratch").is_none());
}

#[test]
fn test_page_from_macros() {
    let page = build_reference_document(&VolumeSlicer::class_symbol(), None).unwrap();

    insta::assert_snapshot!(page, @r"
### The VolumeSlicer class

**class `VolumeSlicer(volume: Vec<f32>, axis: u8)`**

A slicer to show 2D slices of a 3D volume.

Arguments:

  * volume: the 3D array to slice.
  * axis: the dimension to slice in.

**method `VolumeSlicer.slice(index: usize) -> Vec<f32>`**

Get the slice at the given index.

Returns a flat vector.

**property `VolumeSlicer.volume`** (`Vec<f32>`): The volume being sliced.

**property `VolumeSlicer.axis`** (`u8`): The axis to slice along.

**property `VolumeSlicer.indices`**: Iterate over slice indices.
");
}

#[test]
fn test_page_matches_json_round_trip() {
    let class = VolumeSlicer::class_symbol();
    let json = class.to_json().unwrap();
    let reloaded = refdoc_ir::ClassSymbol::from_json(&json).unwrap();

    assert_eq!(
        build_reference_document(&reloaded, None).unwrap(),
        build_reference_document(&class, None).unwrap()
    );
}

#[test]
fn test_builder_for_type_with_companion() {
    let companion = "**function `slicer_helper()`**\n\nA helper next to the class.";
    let output = RefDocBuilder::for_type::<VolumeSlicer>()
        .companion(companion)
        .config(RefDocConfig::default().with_title("## {name}"))
        .build()
        .unwrap();

    assert_eq!(output.method_count(), 1);
    assert_eq!(output.property_count(), 3);
    assert!(output.markdown.starts_with("## VolumeSlicer\n\n"));
    assert!(output.markdown.ends_with(&format!(
        "Iterate over slice indices.\n\n{}",
        companion
    )));
}

#[test]
fn test_generation_is_deterministic() {
    let first = build_reference_document(&VolumeSlicer::class_symbol(), Some("x")).unwrap();
    let second = build_reference_document(&VolumeSlicer::class_symbol(), Some("x")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_builder_from_inventory() {
    let output = RefDocBuilder::from_inventory("VolumeSlicer")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        output.markdown,
        build_reference_document(&VolumeSlicer::class_symbol(), None).unwrap()
    );
}
