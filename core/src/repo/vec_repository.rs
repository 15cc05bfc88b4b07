use crate::repo::{Keyed, Repository};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum VecRepositoryError {
    #[error("entity not found")]
    NotFound,
    #[error("an entity with this key already exists")]
    DuplicateKey,
}

/// Insertion-ordered store backed by a `Vec`. Lookups scan linearly, which is
/// fine for a menu-sized collection.
pub(crate) struct VecRepository<T> {
    data: Vec<T>,
}

impl<T: Keyed> VecRepository<T> {
    pub(crate) fn new() -> Self {
        VecRepository { data: Vec::new() }
    }

    fn position(&self, id: &T::Key) -> Option<usize> {
        self.data.iter().position(|entity| entity.key() == id)
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Keyed + Clone> Repository<T::Key, T> for VecRepository<T> {
    type Error = VecRepositoryError;

    fn get(&self, id: &T::Key) -> Result<T, Self::Error> {
        self.position(id)
            .map(|index| self.data[index].clone())
            .ok_or(VecRepositoryError::NotFound)
    }

    fn add(&mut self, entity: T) -> Result<(), Self::Error> {
        if self.position(entity.key()).is_some() {
            return Err(VecRepositoryError::DuplicateKey);
        }
        self.data.push(entity);
        Ok(())
    }

    fn remove(&mut self, id: &T::Key) -> Result<T, Self::Error> {
        match self.position(id) {
            // Vec::remove shifts the tail left, keeping relative order.
            Some(index) => Ok(self.data.remove(index)),
            None => Err(VecRepositoryError::NotFound),
        }
    }

    fn update(&mut self, entity: T) -> Result<T, Self::Error> {
        match self.position(entity.key()) {
            Some(index) => Ok(std::mem::replace(&mut self.data[index], entity)),
            None => Err(VecRepositoryError::NotFound),
        }
    }

    fn get_all(&self) -> Vec<T> {
        self.data.clone()
    }

    fn contains(&self, id: &T::Key) -> bool {
        self.position(id).is_some()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Dish {
        id: u32,
        name: String,
    }

    impl Keyed for Dish {
        type Key = u32;

        fn key(&self) -> &u32 {
            &self.id
        }
    }

    fn dish(id: u32, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
        }
    }

    fn names(repo: &VecRepository<Dish>) -> Vec<String> {
        repo.get_all().into_iter().map(|d| d.name).collect()
    }

    #[test]
    fn test_add_and_get() {
        let mut repo = VecRepository::new();

        repo.add(dish(1, "Bruschetta")).unwrap();

        assert_eq!(repo.get(&1).unwrap(), dish(1, "Bruschetta"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_add_duplicate_key_rejected() {
        let mut repo = VecRepository::new();
        repo.add(dish(1, "Bruschetta")).unwrap();

        let result = repo.add(dish(1, "Impostor"));

        assert_eq!(result, Err(VecRepositoryError::DuplicateKey));
        assert_eq!(names(&repo), vec!["Bruschetta"]);
    }

    #[test]
    fn test_get_nonexistent() {
        let repo: VecRepository<Dish> = VecRepository::new();

        assert_eq!(repo.get(&0), Err(VecRepositoryError::NotFound));
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let mut repo = VecRepository::new();
        repo.add(dish(30, "c")).unwrap();
        repo.add(dish(10, "a")).unwrap();
        repo.add(dish(20, "b")).unwrap();

        assert_eq!(names(&repo), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_keeps_survivor_order() {
        let mut repo = VecRepository::new();
        repo.add(dish(1, "a")).unwrap();
        repo.add(dish(2, "b")).unwrap();
        repo.add(dish(3, "c")).unwrap();

        let removed = repo.remove(&2).unwrap();

        assert_eq!(removed.name, "b");
        assert_eq!(names(&repo), vec!["a", "c"]);
        assert!(!repo.contains(&2));
    }

    #[test]
    fn test_remove_already_removed() {
        let mut repo = VecRepository::new();
        repo.add(dish(1, "a")).unwrap();
        repo.remove(&1).unwrap();

        assert_eq!(repo.remove(&1), Err(VecRepositoryError::NotFound));
        assert_eq!(repo.len(), 0);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut repo = VecRepository::new();
        repo.add(dish(1, "a")).unwrap();
        repo.add(dish(2, "b")).unwrap();
        repo.add(dish(3, "c")).unwrap();

        let old = repo.update(dish(2, "B")).unwrap();

        assert_eq!(old.name, "b");
        assert_eq!(names(&repo), vec!["a", "B", "c"]);
    }

    #[test]
    fn test_update_nonexistent() {
        let mut repo = VecRepository::new();
        repo.add(dish(1, "a")).unwrap();

        assert_eq!(
            repo.update(dish(9, "ghost")),
            Err(VecRepositoryError::NotFound)
        );
        assert_eq!(names(&repo), vec!["a"]);
    }

    #[test]
    fn test_get_all_is_a_copy() {
        let mut repo = VecRepository::new();
        repo.add(dish(1, "a")).unwrap();

        let mut snapshot = repo.get_all();
        snapshot.clear();

        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_complex_workflow() {
        let mut repo = VecRepository::new();
        repo.add(dish(1, "entity 1")).unwrap();
        repo.add(dish(2, "entity 2")).unwrap();

        repo.update(dish(1, "updated entity 1")).unwrap();
        repo.remove(&2).unwrap();
        repo.add(dish(3, "entity 3")).unwrap();

        assert_eq!(repo.get(&1).unwrap().name, "updated entity 1");
        assert_eq!(repo.get(&2), Err(VecRepositoryError::NotFound));
        assert_eq!(names(&repo), vec!["updated entity 1", "entity 3"]);
    }
}
