//! Scene shell: a fixed ordered catalogue, a cursor into it, and the stage
//! that owns whichever scene is mounted.

use anyhow::{bail, Result};
use rand::SeedableRng;

use crate::environment::Environment;
use crate::placement::SceneRng;
use crate::scene::SceneContent;

/// One catalogue entry
#[derive(Clone, Copy)]
pub struct SceneEntry {
    pub name: &'static str,
    pub build: fn(&mut SceneRng) -> SceneContent,
}

impl std::fmt::Debug for SceneEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneEntry").field("name", &self.name).finish()
    }
}

impl SceneEntry {
    /// Builds the scene with a generator seeded from `seed` and the scene name,
    /// so each scene gets its own stream and rebuilding is reproducible.
    pub fn instantiate(&self, seed: u64) -> SceneContent {
        let mut rng = SceneRng::seed_from_u64(seed ^ name_hash(self.name));
        (self.build)(&mut rng)
    }
}

/// FNV-1a over the scene name
fn name_hash(name: &str) -> u64 {
    name.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

pub const fn next_index(index: usize, count: usize) -> usize {
    (index + 1) % count
}

pub const fn previous_index(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}

/// Navigation request from keyboard or overlay buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
}

/// Cursor over a non-empty catalogue
#[derive(Debug, Clone)]
pub struct Gallery {
    entries: &'static [SceneEntry],
    index: usize,
}

impl Gallery {
    pub fn new(entries: &'static [SceneEntry]) -> Result<Self> {
        if entries.is_empty() {
            bail!("scene catalogue is empty");
        }
        Ok(Self { entries, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &SceneEntry {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[SceneEntry] {
        self.entries
    }

    pub fn next(&mut self) -> usize {
        self.index = next_index(self.index, self.entries.len());
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = previous_index(self.index, self.entries.len());
        self.index
    }

    pub fn apply(&mut self, command: NavCommand) -> usize {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
        }
    }

    /// Case-insensitive lookup; also accepts the 1-based position
    pub fn find(&self, name: &str) -> Result<usize> {
        let wanted = name.trim();
        if let Some(i) = self
            .entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(wanted))
        {
            return Ok(i);
        }
        if let Ok(position) = wanted.parse::<usize>() {
            if (1..=self.entries.len()).contains(&position) {
                return Ok(position - 1);
            }
        }
        bail!(
            "unknown scene {wanted:?}; available: {}",
            self.entries.iter().map(|e| e.name).collect::<Vec<_>>().join(", ")
        )
    }

    pub fn select(&mut self, name: &str) -> Result<usize> {
        self.index = self.find(name)?;
        Ok(self.index)
    }

    /// On-screen indicator: "name (index+1/total)"
    pub fn label(&self) -> String {
        format!("{} ({}/{})", self.current().name, self.index + 1, self.entries.len())
    }
}

/// Holds the mounted scene and the environment it has taken over
#[derive(Debug, Default)]
pub struct Stage {
    environment: Environment,
    mounted: Option<SceneContent>,
    generation: u64,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unmounts whatever is current, then hands the environment to `content`
    pub fn mount(&mut self, content: SceneContent) {
        self.unmount();
        log::info!("mounting scene {:?}", content.name());
        self.environment = *content.environment();
        self.mounted = Some(content);
        self.generation += 1;
    }

    /// Drops the mounted scene and restores the default environment
    pub fn unmount(&mut self) -> Option<SceneContent> {
        let previous = self.mounted.take();
        if let Some(content) = &previous {
            log::debug!("unmounting scene {:?}", content.name());
        }
        self.environment = Environment::default();
        previous
    }

    /// Advances the mounted scene to `t` seconds since it was mounted
    pub fn tick(&mut self, t: f32) {
        if let Some(content) = &mut self.mounted {
            content.tick(t);
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn mounted(&self) -> Option<&SceneContent> {
        self.mounted.as_ref()
    }

    pub fn mounted_mut(&mut self) -> Option<&mut SceneContent> {
        self.mounted.as_mut()
    }

    /// Bumped on every mount so the renderer knows to rebuild its buffers
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_helpers_cover_edges() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(previous_index(0, 3), 2);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(previous_index(0, 1), 0);
    }

    #[test]
    fn name_hash_differs_per_name() {
        assert_ne!(name_hash("Coral Reef"), name_hash("Zen Garden"));
    }
}
