//! The diorama catalogue. Order here is browsing order.

mod common;
mod gothic_cathedral;
mod coral_reef;
mod zen_garden;
mod space_station;
mod pirate_ship;
mod crystal_cave;
mod desert_temple;
mod firefly_forest;
mod snow_village;
mod volcano;
mod lighthouse;
mod floating_islands;
mod observatory;
mod autumn_grove;
mod aquarium;
mod neon_city;
mod windmill_farm;
mod standing_stones;
mod mushroom_grove;
mod ice_palace;
mod clockwork_workshop;
mod orrery;
mod sunken_ruins;
mod bamboo_pond;
mod amphitheater;
mod candy_land;
mod toy_workshop;
mod jellyfish_bloom;
mod desert_oasis;
mod tropical_island;
mod aurora_tundra;
mod haunted_graveyard;
mod torii_shrine;
mod airship_dock;
mod alien_planet;
mod asteroid_belt;
mod lantern_festival;
mod cherry_blossom_hill;
mod carnival;
mod hot_air_balloons;
mod medieval_castle;
mod jungle_ziggurat;
mod greenhouse;
mod beehive_meadow;
mod tidal_pool;
mod wizard_tower;
mod model_railway;
mod fountain_plaza;
mod robot_factory;
mod campfire_night;

use crate::gallery::SceneEntry;

pub const CATALOG: &[SceneEntry] = &[
    SceneEntry { name: "Gothic Cathedral", build: gothic_cathedral::build },
    SceneEntry { name: "Coral Reef", build: coral_reef::build },
    SceneEntry { name: "Zen Garden", build: zen_garden::build },
    SceneEntry { name: "Space Station", build: space_station::build },
    SceneEntry { name: "Pirate Ship", build: pirate_ship::build },
    SceneEntry { name: "Crystal Cave", build: crystal_cave::build },
    SceneEntry { name: "Desert Temple", build: desert_temple::build },
    SceneEntry { name: "Firefly Forest", build: firefly_forest::build },
    SceneEntry { name: "Snow Village", build: snow_village::build },
    SceneEntry { name: "Volcano", build: volcano::build },
    SceneEntry { name: "Lighthouse", build: lighthouse::build },
    SceneEntry { name: "Floating Islands", build: floating_islands::build },
    SceneEntry { name: "Observatory", build: observatory::build },
    SceneEntry { name: "Autumn Grove", build: autumn_grove::build },
    SceneEntry { name: "Aquarium", build: aquarium::build },
    SceneEntry { name: "Neon City", build: neon_city::build },
    SceneEntry { name: "Windmill Farm", build: windmill_farm::build },
    SceneEntry { name: "Standing Stones", build: standing_stones::build },
    SceneEntry { name: "Mushroom Grove", build: mushroom_grove::build },
    SceneEntry { name: "Ice Palace", build: ice_palace::build },
    SceneEntry { name: "Clockwork Workshop", build: clockwork_workshop::build },
    SceneEntry { name: "Orrery", build: orrery::build },
    SceneEntry { name: "Sunken Ruins", build: sunken_ruins::build },
    SceneEntry { name: "Bamboo Pond", build: bamboo_pond::build },
    SceneEntry { name: "Amphitheater", build: amphitheater::build },
    SceneEntry { name: "Candy Land", build: candy_land::build },
    SceneEntry { name: "Toy Workshop", build: toy_workshop::build },
    SceneEntry { name: "Jellyfish Bloom", build: jellyfish_bloom::build },
    SceneEntry { name: "Desert Oasis", build: desert_oasis::build },
    SceneEntry { name: "Tropical Island", build: tropical_island::build },
    SceneEntry { name: "Aurora Tundra", build: aurora_tundra::build },
    SceneEntry { name: "Haunted Graveyard", build: haunted_graveyard::build },
    SceneEntry { name: "Torii Shrine", build: torii_shrine::build },
    SceneEntry { name: "Airship Dock", build: airship_dock::build },
    SceneEntry { name: "Alien Planet", build: alien_planet::build },
    SceneEntry { name: "Asteroid Belt", build: asteroid_belt::build },
    SceneEntry { name: "Lantern Festival", build: lantern_festival::build },
    SceneEntry { name: "Cherry Blossom Hill", build: cherry_blossom_hill::build },
    SceneEntry { name: "Carnival", build: carnival::build },
    SceneEntry { name: "Hot Air Balloons", build: hot_air_balloons::build },
    SceneEntry { name: "Medieval Castle", build: medieval_castle::build },
    SceneEntry { name: "Jungle Ziggurat", build: jungle_ziggurat::build },
    SceneEntry { name: "Greenhouse", build: greenhouse::build },
    SceneEntry { name: "Beehive Meadow", build: beehive_meadow::build },
    SceneEntry { name: "Tidal Pool", build: tidal_pool::build },
    SceneEntry { name: "Wizard Tower", build: wizard_tower::build },
    SceneEntry { name: "Model Railway", build: model_railway::build },
    SceneEntry { name: "Fountain Plaza", build: fountain_plaza::build },
    SceneEntry { name: "Robot Factory", build: robot_factory::build },
    SceneEntry { name: "Campfire Night", build: campfire_night::build },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_match_built_scenes() {
        for entry in CATALOG {
            let content = entry.instantiate(7);
            assert_eq!(content.name(), entry.name);
        }
    }
}
