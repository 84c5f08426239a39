use criterion::*;
use sigil_ecs::prelude::*;

const COUNT: usize = 10000;

#[derive(Default)]
struct Translation {
    value: [f32; 3],
}

#[derive(Default, Copy, Clone)]
struct Velocity {
    value: [f32; 3],
}

/// Keeps its own list of matching entities, fed by change notifications.
struct MovementSystem {
    interest: Signature,
    entities: Vec<Entity>,
}

impl System for MovementSystem {
    fn entity_changed(&mut self, _components: &mut ComponentStore, entity: Entity, signature: Signature) {
        if self.interest.is_subset_of(&signature) {
            if !self.entities.contains(&entity) {
                self.entities.push(entity);
            }
        } else {
            self.entities.retain(|e| *e != entity);
        }
    }

    fn update(&mut self, components: &mut ComponentStore) {
        for &entity in &self.entities {
            let velocity = match components.get::<Velocity>(entity) {
                Some(velocity) => *velocity,
                None => continue,
            };

            if let Some(translation) = components.get_mut::<Translation>(entity) {
                translation.value[0] += velocity.value[0];
                translation.value[1] += velocity.value[1];
                translation.value[2] += velocity.value[2];
            }
        }
    }
}

fn populated_world() -> World {
    let mut world = World::new();
    let interest = world.signature_of::<(Translation, Velocity)>();
    world.register_system(MovementSystem {
        interest,
        entities: Vec::new(),
    });

    for _ in 0..COUNT {
        let entity = world.create_entity();
        world.add(entity, Translation::default());
        world.add(entity, Velocity { value: [1.0, 0.0, 0.0] });
    }

    world.start();
    world
}

fn add_components(c: &mut Criterion) {
    c.bench_function("Add components", |b| {
        b.iter_batched(
            || {
                let mut world = World::new();
                let entities: Vec<Entity> = (0..COUNT).map(|_| world.create_entity()).collect();
                (world, entities)
            },
            |(mut world, entities)| {
                for entity in entities {
                    world.add(entity, Translation::default());
                    world.add(entity, Velocity::default());
                }
                world
            },
            BatchSize::PerIteration,
        );
    });
}

fn remove_components(c: &mut Criterion) {
    c.bench_function("Remove components", |b| {
        b.iter_batched(
            || {
                let mut world = World::new();
                let entities: Vec<Entity> = (0..COUNT).map(|_| world.create_entity()).collect();
                for &entity in &entities {
                    world.add(entity, Translation::default());
                    world.add(entity, Velocity::default());
                }
                (world, entities)
            },
            |(mut world, entities)| {
                for entity in entities {
                    world.remove_all(entity);
                }
                world
            },
            BatchSize::PerIteration,
        );
    });
}

fn update_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Update");

    group.bench_function("First tick", |b| {
        b.iter_batched(
            populated_world,
            |mut world| {
                world.update();
                world
            },
            BatchSize::PerIteration,
        );
    });

    group.bench_function("Steady state", |b| {
        let mut world = populated_world();
        world.update();

        b.iter(|| world.update());
    });
}

criterion_group!(benchmarks, add_components, remove_components, update_ticks);
criterion_main!(benchmarks);
