//! Hand-curated list of popular images
//!
//! Shown when the user has typed nothing past the trigger character, so the
//! completion popup is instant instead of waiting on a search round-trip.

use super::models::HubSearchResult;

/// Metadata for one popular image
#[derive(Debug, Clone)]
struct PopularImage {
    name: &'static str,
    is_automated: bool,
    is_trusted: bool,
    is_official: bool,
    star_count: u64,
    description: &'static str,
}

impl PopularImage {
    const fn official(name: &'static str, star_count: u64, description: &'static str) -> Self {
        Self {
            name,
            is_automated: false,
            is_trusted: false,
            is_official: true,
            star_count,
            description,
        }
    }
}

/// Static seed list, order preserved as curated
static POPULAR_IMAGES: &[PopularImage] = &[
    PopularImage::official(
        "redis",
        1300,
        "Redis is an open source key-value store that functions as a data structure server.",
    ),
    PopularImage::official(
        "ubuntu",
        2600,
        "Ubuntu is a Debian-based Linux operating system based on free software.",
    ),
    PopularImage::official(
        "wordpress",
        582,
        "The WordPress rich content management system can utilize plugins, widgets, and themes.",
    ),
    PopularImage::official(
        "mysql",
        1300,
        "MySQL is a widely used, open-source relational database management system (RDBMS).",
    ),
    PopularImage::official(
        "mongo",
        1100,
        "MongoDB document databases provide high availability and easy scalability.",
    ),
    PopularImage::official("centos", 1600, "The official build of CentOS."),
    PopularImage::official(
        "node",
        1200,
        "Node.js is a JavaScript-based platform for server-side and networking applications.",
    ),
    PopularImage::official("nginx", 1600, "Official build of Nginx."),
    PopularImage::official(
        "postgres",
        1200,
        "The PostgreSQL object-relational database system provides reliability and data integrity.",
    ),
    PopularImage {
        name: "microsoft/aspnet",
        is_automated: true,
        is_trusted: true,
        is_official: false,
        star_count: 277,
        description: "ASP.NET is an open source server-side Web application framework",
    },
];

/// The seed results returned for an empty query, in curated order.
pub fn popular_images() -> Vec<HubSearchResult> {
    POPULAR_IMAGES
        .iter()
        .map(|image| HubSearchResult {
            name: image.name.to_string(),
            is_automated: image.is_automated,
            is_trusted: image.is_trusted,
            is_official: image.is_official,
            star_count: image.star_count,
            description: image.description.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "popular_tests.rs"]
mod popular_tests;
