use rand::SeedableRng;

use diorama_gallery::environment::Environment;
use diorama_gallery::math::Rgb;
use diorama_gallery::placement::SceneRng;
use diorama_gallery::{Gallery, NavCommand, SceneBuilder, SceneContent, SceneEntry, Stage, CATALOG};

fn alpha(_: &mut SceneRng) -> SceneContent {
    SceneBuilder::new("A").background(Rgb::hex(0xff0000)).fog(Rgb::hex(0xff0000), 1.0, 10.0).build()
}

fn beta(_: &mut SceneRng) -> SceneContent {
    SceneBuilder::new("B").background(Rgb::hex(0x00ff00)).build()
}

fn gamma(_: &mut SceneRng) -> SceneContent {
    SceneBuilder::new("C").build()
}

static ABC: &[SceneEntry] = &[
    SceneEntry { name: "A", build: alpha },
    SceneEntry { name: "B", build: beta },
    SceneEntry { name: "C", build: gamma },
];

#[cfg(test)]
mod navigation_tests {
    use super::*;

    #[test]
    fn test_empty_catalogue_is_rejected() {
        assert!(Gallery::new(&[]).is_err());
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut gallery = Gallery::new(ABC).unwrap();
        assert_eq!(gallery.current().name, "A");

        assert_eq!(gallery.next(), 1);
        assert_eq!(gallery.next(), 2);
        assert_eq!(gallery.next(), 0);
        assert_eq!(gallery.previous(), 2);
        assert_eq!(gallery.current().name, "C");
    }

    #[test]
    fn test_n_nexts_return_to_start() {
        let mut gallery = Gallery::new(CATALOG).unwrap();
        let start = gallery.index();
        for _ in 0..gallery.len() {
            gallery.apply(NavCommand::Next);
        }
        assert_eq!(gallery.index(), start);
    }

    #[test]
    fn test_previous_undoes_next_everywhere() {
        let mut gallery = Gallery::new(CATALOG).unwrap();
        for _ in 0..gallery.len() {
            let before = gallery.index();
            gallery.apply(NavCommand::Next);
            gallery.apply(NavCommand::Previous);
            assert_eq!(gallery.index(), before);
            gallery.apply(NavCommand::Next);
        }
    }

    #[test]
    fn test_label_is_one_based() {
        let mut gallery = Gallery::new(ABC).unwrap();
        assert_eq!(gallery.label(), "A (1/3)");
        gallery.previous();
        assert_eq!(gallery.label(), "C (3/3)");
    }

    #[test]
    fn test_select_by_name_or_position() {
        let mut gallery = Gallery::new(ABC).unwrap();
        assert_eq!(gallery.select("b").unwrap(), 1);
        assert_eq!(gallery.select("3").unwrap(), 2);
        assert!(gallery.select("0").is_err());
        assert!(gallery.select("Nowhere").is_err());
        // a failed select leaves the cursor alone
        assert_eq!(gallery.current().name, "C");
    }

    #[test]
    fn test_switching_swaps_environment() {
        let mut gallery = Gallery::new(ABC).unwrap();
        let mut stage = Stage::new();

        stage.mount(gallery.current().instantiate(1));
        assert_eq!(stage.environment().background, Rgb::hex(0xff0000));
        assert!(stage.environment().fog.is_some());

        gallery.apply(NavCommand::Next);
        stage.mount(gallery.current().instantiate(1));
        assert_eq!(stage.mounted().map(|c| c.name()), Some("B"));
        assert_eq!(stage.environment().background, Rgb::hex(0x00ff00));
        assert!(stage.environment().fog.is_none());

        gallery.apply(NavCommand::Next);
        stage.mount(gallery.current().instantiate(1));
        assert_eq!(*stage.environment(), Environment::default());
    }

    #[test]
    fn test_unmount_restores_default_environment() {
        let mut stage = Stage::new();
        let mut rng = SceneRng::seed_from_u64(0);
        stage.mount(alpha(&mut rng));
        let previous = stage.unmount();

        assert_eq!(previous.map(|c| c.name().to_string()), Some("A".to_string()));
        assert!(stage.mounted().is_none());
        assert_eq!(*stage.environment(), Environment::default());
    }

    #[test]
    fn test_every_mount_bumps_generation() {
        let mut stage = Stage::new();
        let gallery = Gallery::new(ABC).unwrap();
        assert_eq!(stage.generation(), 0);
        stage.mount(gallery.current().instantiate(0));
        stage.mount(gallery.current().instantiate(0));
        assert_eq!(stage.generation(), 2);
    }
}
