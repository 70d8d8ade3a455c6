use std::ops::Range;

use glam::Vec3;
use serde::Serialize;

use crate::animation::{animate, Animation};
use crate::environment::{Environment, Fog, Light, Lighting};
use crate::instancing::InstancedBatch;
use crate::math::Rgb;
use crate::mesh::Primitive;
use crate::placement::Placement;
use crate::types::{GlobalsUniform, InstanceRaw};

/// Surface response on top of the placement colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub emissive: f32,
    /// Specular strength in [0, 1]
    pub gloss: f32,
}

impl Material {
    pub const MATTE: Material = Material { emissive: 0.0, gloss: 0.05 };

    pub const fn glossy(gloss: f32) -> Self {
        Self { emissive: 0.0, gloss }
    }

    pub const fn glowing(emissive: f32) -> Self {
        Self { emissive, gloss: 0.0 }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::MATTE
    }
}

/// A placed primitive with its material and any animators
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub primitive: Primitive,
    pub placement: Placement,
    pub material: Material,
    pub animations: Vec<Animation>,
}

impl SceneObject {
    pub fn instance_at(&self, t: f32) -> InstanceRaw {
        let state = animate(&self.placement, &self.material, &self.animations, t);
        InstanceRaw::new(state.transform, state.color, state.emissive, self.material.gloss)
    }

    pub fn is_animated(&self) -> bool {
        !self.animations.is_empty()
    }
}

/// Contiguous slice of the object buffer drawn with one mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawGroup {
    pub primitive: Primitive,
    pub range: Range<u32>,
}

/// Everything one mounted scene owns: environment, lights, objects, batches.
///
/// Objects are sorted by primitive at build time so each primitive occupies a
/// contiguous range of `object_buffer`; animated objects rewrite their own slot
/// each tick.
#[derive(Debug, Clone)]
pub struct SceneContent {
    name: String,
    environment: Environment,
    lighting: Lighting,
    objects: Vec<SceneObject>,
    object_buffer: Vec<InstanceRaw>,
    groups: Vec<DrawGroup>,
    animated: Vec<usize>,
    objects_dirty: bool,
    batches: Vec<InstancedBatch>,
    time: f32,
}

impl SceneContent {
    fn new(
        name: String,
        environment: Environment,
        lighting: Lighting,
        mut objects: Vec<SceneObject>,
        batches: Vec<InstancedBatch>,
    ) -> Self {
        objects.sort_by_key(|o| o.primitive);

        let mut groups: Vec<DrawGroup> = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            let i = i as u32;
            match groups.last_mut() {
                Some(group) if group.primitive == object.primitive => group.range.end = i + 1,
                _ => groups.push(DrawGroup { primitive: object.primitive, range: i..i + 1 }),
            }
        }

        let object_buffer = objects.iter().map(|o| o.instance_at(0.0)).collect();
        let animated = objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_animated())
            .map(|(i, _)| i)
            .collect();

        Self {
            name,
            environment,
            lighting,
            objects,
            object_buffer,
            groups,
            animated,
            objects_dirty: true,
            batches,
            time: 0.0,
        }
    }

    /// Runs every registered animator for elapsed time `t`
    pub fn tick(&mut self, t: f32) {
        self.time = t;
        for &index in &self.animated {
            self.object_buffer[index] = self.objects[index].instance_at(t);
        }
        if !self.animated.is_empty() {
            self.objects_dirty = true;
        }
        for batch in &mut self.batches {
            batch.update(t);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object_instances(&self) -> &[InstanceRaw] {
        &self.object_buffer
    }

    pub fn groups(&self) -> &[DrawGroup] {
        &self.groups
    }

    pub fn animated_count(&self) -> usize {
        self.animated.len()
    }

    pub fn batches(&self) -> &[InstancedBatch] {
        &self.batches
    }

    pub fn batches_mut(&mut self) -> &mut [InstancedBatch] {
        &mut self.batches
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Returns whether the object buffer changed since the last call
    pub fn take_objects_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.objects_dirty, false)
    }

    /// Fills the scene-dependent part of the globals uniform
    pub fn write_globals(&self, globals: &mut GlobalsUniform) {
        let ambient = self.lighting.ambient;
        globals.ambient = [ambient.r, ambient.g, ambient.b, self.lighting.ambient_intensity];
        let (lights, count) = self.lighting.pack(self.time);
        globals.lights = lights;
        globals.light_count = count;
        match self.environment.fog {
            Some(fog) => {
                globals.fog_color = [fog.color.r, fog.color.g, fog.color.b, 1.0];
                globals.fog_range = [fog.near, fog.far, 0.0, 0.0];
            }
            None => {
                globals.fog_color = [0.0; 4];
                globals.fog_range = [0.0; 4];
            }
        }
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            name: self.name.clone(),
            objects: self.objects.len(),
            animated_objects: self.animated.len(),
            lights: self.lighting.lights.len(),
            environment: self.environment,
            batches: self
                .batches
                .iter()
                .map(|b| BatchSummary {
                    label: b.label().to_string(),
                    primitive: b.primitive(),
                    instances: b.len(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub label: String,
    pub primitive: Primitive,
    pub instances: usize,
}

/// Serializable description printed by `--describe`
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub name: String,
    pub objects: usize,
    pub animated_objects: usize,
    pub lights: usize,
    pub environment: Environment,
    pub batches: Vec<BatchSummary>,
}

impl SceneSummary {
    pub fn total_instances(&self) -> usize {
        self.objects + self.batches.iter().map(|b| b.instances).sum::<usize>()
    }
}

// ============================================================================
// SceneBuilder - Fluent API for scene construction
// ============================================================================

/// Builder for assembling a scene
pub struct SceneBuilder {
    name: String,
    environment: Environment,
    lighting: Lighting,
    objects: Vec<SceneObject>,
    batches: Vec<InstancedBatch>,
}

impl SceneBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            environment: Environment::default(),
            lighting: Lighting::default(),
            objects: Vec::new(),
            batches: Vec::new(),
        }
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.environment.background = color;
        self
    }

    pub fn fog(mut self, color: Rgb, near: f32, far: f32) -> Self {
        self.environment.fog = Some(Fog { color, near, far });
        self
    }

    pub fn ambient(mut self, color: Rgb, intensity: f32) -> Self {
        self.lighting.ambient = color;
        self.lighting.ambient_intensity = intensity;
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.lighting.lights.push(light);
        self
    }

    pub fn sun(self, direction: Vec3, color: Rgb, intensity: f32) -> Self {
        self.light(Light::directional(direction, color, intensity))
    }

    pub fn point_light(self, position: Vec3, range: f32, color: Rgb, intensity: f32) -> Self {
        self.light(Light::point(position, range, color, intensity))
    }

    /// Adds a static object
    pub fn add(self, primitive: Primitive, placement: Placement, material: Material) -> Self {
        self.add_animated(primitive, placement, material, Vec::new())
    }

    /// Adds an object with per-frame animators
    pub fn add_animated(
        mut self,
        primitive: Primitive,
        placement: Placement,
        material: Material,
        animations: Vec<Animation>,
    ) -> Self {
        self.objects.push(SceneObject { primitive, placement, material, animations });
        self
    }

    /// Adds every placement as a static object of the same primitive
    pub fn add_all(
        mut self,
        primitive: Primitive,
        placements: impl IntoIterator<Item = Placement>,
        material: Material,
    ) -> Self {
        self.objects.extend(placements.into_iter().map(|placement| SceneObject {
            primitive,
            placement,
            material,
            animations: Vec::new(),
        }));
        self
    }

    /// Adds every placement with animators derived from its index
    pub fn add_all_animated(
        mut self,
        primitive: Primitive,
        placements: impl IntoIterator<Item = Placement>,
        material: Material,
        animations: impl Fn(usize, &Placement) -> Vec<Animation>,
    ) -> Self {
        self.objects.extend(placements.into_iter().enumerate().map(|(i, placement)| SceneObject {
            primitive,
            animations: animations(i, &placement),
            placement,
            material,
        }));
        self
    }

    pub fn batch(mut self, batch: InstancedBatch) -> Self {
        self.batches.push(batch);
        self
    }

    /// Applies a transformation to every object added so far
    pub fn transform(mut self, f: impl Fn(&mut SceneObject)) -> Self {
        self.objects.iter_mut().for_each(f);
        self
    }

    pub fn build(self) -> SceneContent {
        log::debug!(
            "scene {:?} built: {} objects, {} batches, {} lights",
            self.name,
            self.objects.len(),
            self.batches.len(),
            self.lighting.lights.len()
        );
        SceneContent::new(self.name, self.environment, self.lighting, self.objects, self.batches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_at(x: f32) -> Placement {
        Placement::at(Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn groups_are_contiguous_per_primitive() {
        let content = SceneBuilder::new("groups")
            .add(Primitive::Sphere, cube_at(0.0), Material::MATTE)
            .add(Primitive::Cube, cube_at(1.0), Material::MATTE)
            .add(Primitive::Sphere, cube_at(2.0), Material::MATTE)
            .add(Primitive::Cube, cube_at(3.0), Material::MATTE)
            .build();

        assert_eq!(content.groups().len(), 2);
        assert_eq!(content.groups()[0], DrawGroup { primitive: Primitive::Cube, range: 0..2 });
        assert_eq!(content.groups()[1], DrawGroup { primitive: Primitive::Sphere, range: 2..4 });
    }

    #[test]
    fn static_scene_stays_clean_after_first_upload() {
        let mut content = SceneBuilder::new("static")
            .add(Primitive::Cube, cube_at(0.0), Material::MATTE)
            .build();
        assert!(content.take_objects_dirty());
        content.tick(1.0);
        assert!(!content.take_objects_dirty());
    }

    #[test]
    fn animated_object_rewrites_its_slot() {
        let mut content = SceneBuilder::new("bob")
            .add_animated(
                Primitive::Cube,
                cube_at(0.0),
                Material::MATTE,
                vec![Animation::bob(1.0, 1.0, 0.0)],
            )
            .build();
        let before = content.object_instances()[0];
        content.tick(std::f32::consts::FRAC_PI_2);
        let after = content.object_instances()[0];
        assert_ne!(before, after);
        assert!((after.model_matrix().w_axis.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn transform_only_touches_objects_added_so_far() {
        let content = SceneBuilder::new("transform")
            .add(Primitive::Cube, cube_at(0.0), Material::MATTE)
            .transform(|object| object.animations.push(Animation::spin_y(1.0)))
            .add(Primitive::Cube, cube_at(1.0), Material::MATTE)
            .build();
        assert_eq!(content.animated_count(), 1);
    }
}
