mod vec_repository;

/// Entities that carry their own key.
pub(crate) trait Keyed {
    type Key: Clone + Eq + std::fmt::Debug;
    fn key(&self) -> &Self::Key;
}

/// Ordered store of entities. Implementations keep insertion order; removing
/// an entity never reorders the survivors.
pub(crate) trait Repository<ID, Entity> {
    type Error;
    fn get(&self, id: &ID) -> Result<Entity, Self::Error>;
    fn add(&mut self, entity: Entity) -> Result<(), Self::Error>;
    fn remove(&mut self, id: &ID) -> Result<Entity, Self::Error>;
    /// Replace the entity with the same key in place, returning the old one.
    fn update(&mut self, entity: Entity) -> Result<Entity, Self::Error>;
    fn get_all(&self) -> Vec<Entity>;
    fn contains(&self, id: &ID) -> bool;
    fn len(&self) -> usize;
}

pub(crate) use vec_repository::VecRepository;
