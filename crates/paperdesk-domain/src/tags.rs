//! Tag vocabulary and normalization.

use std::collections::BTreeSet;

use crate::record::PaperRecord;

/// The closed tag vocabulary of the catalog.
///
/// Records may only carry tags from this set, plus generated `Year YYYY`
/// pseudo-tags. Matching is case-sensitive.
#[derive(Clone, Debug)]
pub struct TagVocabulary {
    tags: BTreeSet<String>,
}

const DEFAULT_TAGS: &[&str] = &[
    "2DGS",
    "360 degree",
    "3ster-based",
    "Acceleration",
    "Antialiasing",
    "Autonomous Driving",
    "Avatar",
    "Classic Work",
    "Code",
    "Compression",
    "Dataset",
    "Deblurring",
    "Densification",
    "Diffusion",
    "Distributed",
    "Dynamic",
    "Editing",
    "Event Camera",
    "Feed-Forward",
    "GAN",
    "Gaussian Video",
    "Inpainting",
    "In the Wild",
    "Language Embedding",
    "Large-Scale",
    "Lidar",
    "LoD",
    "Medicine",
    "Meshing",
    "Misc",
    "Monocular",
    "Object Detection",
    "Optimization",
    "Perspective-correct",
    "Physics",
    "Point Cloud",
    "Poses",
    "Project",
    "Ray Tracing",
    "Relight",
    "Rendering",
    "Review",
    "Robotics",
    "SLAM",
    "Segmentation",
    "Sparse",
    "Stereo",
    "Style Transfer",
    "Super Resolution",
    "Texturing",
    "Transformer",
    "Uncertainty",
    "Video",
    "Virtual Reality",
    "World Generation",
];

impl Default for TagVocabulary {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TagVocabulary {
    /// Build a vocabulary from an explicit tag list.
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// Whether a tag is allowed on a record. `Year YYYY` pseudo-tags are
    /// always accepted.
    pub fn contains(&self, tag: &str) -> bool {
        tag.starts_with("Year ") || self.tags.contains(tag)
    }

    /// The vocabulary in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

/// Sorted, deduplicated form of a tag list. Case-sensitive: `"Code"` and
/// `"code"` are distinct tags.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let set: BTreeSet<&String> = tags.iter().collect();
    set.into_iter().cloned().collect()
}

/// Sync the link-derived tags with the record's URL fields: `Project`,
/// `Code`, and `Video` are present exactly when the matching URL is set.
/// Other tags are left alone.
pub fn apply_auto_tags(record: &mut PaperRecord) {
    let mappings = [
        ("Project", record.project_page.clone()),
        ("Code", record.code.clone()),
        ("Video", record.video.clone()),
    ];
    for (tag, url) in mappings {
        let has_url = url.is_some_and(|u| !u.trim().is_empty());
        let has_tag = record.tags.iter().any(|t| t == tag);
        if has_url && !has_tag {
            record.tags.push(tag.to_string());
        } else if !has_url && has_tag {
            record.tags.retain(|t| t != tag);
        }
    }
    record.tags = normalize_tags(&record.tags);
}
