use std::num::NonZeroUsize;

use glam::Vec3;
use rapier3d::prelude::*;

use crate::domain::SimulationConfig;

use super::{ParticleWorld, Stepper};

/// Cloth particles only interact with the sphere, never with each other.
const CLOTH_GROUP: Group = Group::GROUP_1;
const SPHERE_GROUP: Group = Group::GROUP_2;

/// Physics world backed by rapier.
///
/// Particles are rotation-locked rigid bodies carrying a tiny ball collider;
/// distance constraints are generic joints whose coupled linear axes are
/// limited to exactly the rest distance; the sphere is a kinematic body whose
/// position the orbit overwrites each frame.
pub struct RapierWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    sphere: RigidBodyHandle,
    particle_radius: Real,
    friction: Real,
    restitution: Real,
    elapsed: f32,
}

impl RapierWorld {
    pub fn new(config: &SimulationConfig) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = config.dt;
        integration_parameters.num_solver_iterations =
            NonZeroUsize::new(config.solver_iterations).unwrap_or(NonZeroUsize::MIN);
        integration_parameters.contact_natural_frequency = config.contact.natural_frequency;
        integration_parameters.contact_damping_ratio = config.contact.damping_ratio;

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let sphere = bodies.insert(
            RigidBodyBuilder::kinematic_position_based()
                .translation(vector![0.0, 0.0, 0.0])
                .build(),
        );
        let sphere_collider = ColliderBuilder::ball(config.sphere_collider_radius())
            .friction(config.contact.friction)
            .restitution(config.contact.restitution)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .restitution_combine_rule(CoefficientCombineRule::Min)
            .collision_groups(InteractionGroups::new(SPHERE_GROUP, CLOTH_GROUP))
            .build();
        colliders.insert_with_parent(sphere_collider, sphere, &mut bodies);

        let g = config.gravity;
        Self {
            gravity: vector![g.x, g.y, g.z],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            sphere,
            particle_radius: config.particle_radius,
            friction: config.contact.friction,
            restitution: config.contact.restitution,
            elapsed: 0.0,
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    /// Position the sphere will take on after the next step.
    pub fn sphere_target(&self) -> Vec3 {
        let body = &self.bodies[self.sphere];
        let t = body.next_position().translation.vector;
        Vec3::new(t.x, t.y, t.z)
    }
}

impl ParticleWorld for RapierWorld {
    type Handle = RigidBodyHandle;

    fn add_particle(&mut self, position: Vec3, mass: f32) -> RigidBodyHandle {
        let builder = if mass == 0.0 {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic().lock_rotations()
        };
        let handle = self
            .bodies
            .insert(builder.translation(vector![position.x, position.y, position.z]).build());

        let mut collider = ColliderBuilder::ball(self.particle_radius)
            .friction(self.friction)
            .restitution(self.restitution)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .restitution_combine_rule(CoefficientCombineRule::Min)
            .collision_groups(InteractionGroups::new(CLOTH_GROUP, SPHERE_GROUP));
        if mass > 0.0 {
            collider = collider.mass(mass);
        }
        self.colliders
            .insert_with_parent(collider.build(), handle, &mut self.bodies);
        handle
    }

    fn add_distance_constraint(&mut self, a: RigidBodyHandle, b: RigidBodyHandle, rest_distance: f32) {
        // Equal lower and upper limits hold the pair apart as well as together.
        let joint = GenericJointBuilder::new(JointAxesMask::empty())
            .coupled_axes(JointAxesMask::LIN_AXES)
            .limits(JointAxis::LinX, [rest_distance, rest_distance]);
        self.impulse_joints.insert(a, b, joint, true);
    }

    fn position(&self, handle: RigidBodyHandle) -> Vec3 {
        let t = self.bodies[handle].translation();
        Vec3::new(t.x, t.y, t.z)
    }

    fn is_fixed(&self, handle: RigidBodyHandle) -> bool {
        self.bodies[handle].is_fixed()
    }
}

impl Stepper for RapierWorld {
    fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
        self.elapsed += dt;
    }

    fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn set_sphere_position(&mut self, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(self.sphere) {
            body.set_next_kinematic_translation(vector![position.x, position.y, position.z]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_particle_ignores_gravity() {
        let mut world = RapierWorld::new(&SimulationConfig::default());
        let pinned = world.add_particle(Vec3::new(0.0, 1.0, 0.0), 0.0);
        let free = world.add_particle(Vec3::new(1.0, 1.0, 0.0), 0.01);

        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }

        assert!(world.is_fixed(pinned));
        assert!(!world.is_fixed(free));
        assert_eq!(world.position(pinned), Vec3::new(0.0, 1.0, 0.0));
        assert!(world.position(free).y < 0.9, "free particle should fall");
        assert!((world.elapsed() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn distance_constraint_pushes_compressed_pair_apart() {
        let config = SimulationConfig {
            gravity: Vec3::ZERO,
            ..SimulationConfig::default()
        };
        let mut world = RapierWorld::new(&config);
        let a = world.add_particle(Vec3::new(0.0, 0.0, 1.0), 0.0);
        let b = world.add_particle(Vec3::new(0.04, 0.0, 1.0), 0.01);
        world.add_distance_constraint(a, b, 0.1);

        for _ in 0..60 {
            world.step(1.0 / 60.0);
        }

        let d = world.position(a).distance(world.position(b));
        assert!((d - 0.1).abs() < 0.002, "separation {} should reach the rest distance", d);
    }

    #[test]
    fn distance_constraint_pulls_stretched_pair_in() {
        let config = SimulationConfig {
            gravity: Vec3::ZERO,
            ..SimulationConfig::default()
        };
        let mut world = RapierWorld::new(&config);
        let a = world.add_particle(Vec3::new(0.0, 0.0, 1.0), 0.0);
        let b = world.add_particle(Vec3::new(0.0, 0.3, 1.0), 0.01);
        world.add_distance_constraint(a, b, 0.1);

        for _ in 0..60 {
            world.step(1.0 / 60.0);
        }

        let d = world.position(a).distance(world.position(b));
        assert!((d - 0.1).abs() < 0.002, "separation {} should reach the rest distance", d);
    }

    #[test]
    fn sphere_counts_as_a_body() {
        let world = RapierWorld::new(&SimulationConfig::default());
        assert_eq!(world.body_count(), 1);
        assert_eq!(world.constraint_count(), 0);
    }

    #[test]
    fn sphere_target_follows_kinematic_updates() {
        let mut world = RapierWorld::new(&SimulationConfig::default());
        world.set_sphere_position(Vec3::new(0.2, 0.0, 0.0));
        assert!((world.sphere_target() - Vec3::new(0.2, 0.0, 0.0)).length() < 1e-6);
    }
}
