//! The battlescape world: units and their inventories.

use hecs::{Entity, World};

use crate::unit::{Inventory, UnitData};

/// Owns the hecs world for one battle.
#[derive(Default)]
pub struct SavedBattle {
    world: World,
}

impl SavedBattle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a unit with its equipped items.
    pub fn spawn_unit(&mut self, unit: UnitData, inventory: Inventory) -> Entity {
        self.world.spawn((unit, inventory))
    }

    pub fn despawn(&mut self, entity: Entity) {
        let _ = self.world.despawn(entity);
    }

    /// Unit data, or `None` when the entity is gone. A vanished unit is
    /// not an error; displays simply draw nothing.
    pub fn unit(&self, entity: Entity) -> Option<hecs::Ref<'_, UnitData>> {
        self.world.get::<&UnitData>(entity).ok()
    }

    pub fn inventory(&self, entity: Entity) -> Option<hecs::Ref<'_, Inventory>> {
        self.world.get::<&Inventory>(entity).ok()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
