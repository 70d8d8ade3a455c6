use std::collections::HashSet;

use diorama_gallery::types::MAX_LIGHTS;
use diorama_gallery::{Gallery, CATALOG};

#[cfg(test)]
mod scene_catalog_tests {
    use super::*;

    #[test]
    fn test_catalogue_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 50);
    }

    #[test]
    fn test_every_scene_builds_and_animates() {
        for entry in CATALOG {
            let mut content = entry.instantiate(0x5eed);
            assert_eq!(content.name(), entry.name);
            assert!(!content.objects().is_empty(), "{} has no objects", entry.name);
            assert!(!content.batches().is_empty(), "{} has no batches", entry.name);
            assert!(content.lighting().lights.len() <= MAX_LIGHTS, "{} has too many lights", entry.name);

            for t in [0.0, 0.5, 13.0, 240.0] {
                content.tick(t);
                assert!(
                    content.object_instances().iter().all(|i| i.is_finite()),
                    "{} object went non-finite at t={t}",
                    entry.name
                );
                for batch in content.batches() {
                    assert_eq!(batch.instances().len(), batch.len(), "{}/{}", entry.name, batch.label());
                    assert!(batch.instances().iter().all(|i| i.is_finite()), "{}/{}", entry.name, batch.label());
                }
            }
        }
    }

    #[test]
    fn test_scenes_stay_finite_over_long_runs() {
        for entry in CATALOG {
            let mut content = entry.instantiate(0xfeed);
            for t in [1.0, 100.0, 1000.0, 10000.0] {
                content.tick(t);
                assert!(content.object_instances().iter().all(|i| i.is_finite()), "{} at t={t}", entry.name);
                assert!(
                    content.batches().iter().all(|b| b.instances().iter().all(|i| i.is_finite())),
                    "{} batch at t={t}",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn test_browsing_the_full_catalogue_wraps() {
        let mut gallery = Gallery::new(CATALOG).unwrap();
        for _ in 0..CATALOG.len() {
            gallery.next();
        }
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.previous(), CATALOG.len() - 1);
        assert_eq!(gallery.current().name, CATALOG[CATALOG.len() - 1].name);
    }

    #[test]
    fn test_scenes_are_deterministic_per_seed() {
        for entry in CATALOG {
            let a = entry.instantiate(42);
            let b = entry.instantiate(42);
            assert_eq!(a.object_instances(), b.object_instances(), "{}", entry.name);
            for (x, y) in a.batches().iter().zip(b.batches()) {
                assert_eq!(x.params(), y.params(), "{}", entry.name);
            }
        }
    }

    #[test]
    fn test_draw_groups_cover_every_object() {
        for entry in CATALOG {
            let content = entry.instantiate(1);
            let covered: u32 = content.groups().iter().map(|g| g.range.end - g.range.start).sum();
            assert_eq!(covered as usize, content.objects().len(), "{}", entry.name);
        }
    }

    #[test]
    fn test_summary_counts_match_content() {
        for entry in CATALOG {
            let content = entry.instantiate(3);
            let summary = content.summary();
            let batched: usize = content.batches().iter().map(|b| b.len()).sum();
            assert_eq!(summary.total_instances(), content.objects().len() + batched);
            assert!(serde_json::to_string(&summary).is_ok());
        }
    }
}
