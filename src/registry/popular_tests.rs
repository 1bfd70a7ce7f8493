//! Tests for the popular image seed list

use super::*;

#[test]
fn seed_list_has_ten_entries_in_curated_order() {
    let seeds = popular_images();

    assert_eq!(seeds.len(), 10);
    assert_eq!(seeds[0].name, "redis");
    assert_eq!(seeds[1].name, "ubuntu");
    assert_eq!(seeds[8].name, "postgres");
    assert_eq!(seeds[9].name, "microsoft/aspnet");
}

#[test]
fn seeds_carry_their_curated_flags() {
    let seeds = popular_images();

    // Nine official images, one automated+trusted community image.
    for seed in &seeds[..9] {
        assert!(seed.is_official, "{} should be official", seed.name);
        assert!(!seed.is_automated);
        assert!(!seed.is_trusted);
    }

    let aspnet = &seeds[9];
    assert!(aspnet.is_automated);
    assert!(aspnet.is_trusted);
    assert!(!aspnet.is_official);
    assert_eq!(aspnet.star_count, 277);
}
