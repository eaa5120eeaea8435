use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::goal::Goal;
use crate::model::member::Member;
use crate::model::team::Team;

const MIN_ID_PREFIX: usize = 4;

pub trait Lookup {
    const KIND: &'static str;
    fn id(&self) -> Uuid;
    fn is_named(&self, name: &str) -> bool;
}

impl Lookup for Member {
    const KIND: &'static str = "Member";
    fn id(&self) -> Uuid {
        self.id
    }
    fn is_named(&self, name: &str) -> bool {
        Member::is_named(self, name)
    }
}

impl Lookup for Team {
    const KIND: &'static str = "Team";
    fn id(&self) -> Uuid {
        self.id
    }
    fn is_named(&self, name: &str) -> bool {
        Team::is_named(self, name)
    }
}

impl Lookup for Goal {
    const KIND: &'static str = "Goal";
    fn id(&self) -> Uuid {
        self.id
    }
    fn is_named(&self, name: &str) -> bool {
        self.is_titled(name)
    }
}

/// Finds an item by full UUID, case-insensitive name, or unique ID prefix, in that order.
pub fn resolve<'a, T: Lookup>(items: &'a [T], query: &str) -> Result<&'a T> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::InvalidInput(format!("{} name or ID is required", T::KIND)));
    }

    if let Ok(id) = Uuid::parse_str(query) {
        return items
            .iter()
            .find(|i| i.id() == id)
            .ok_or_else(|| Error::NotFound(format!("{} with ID {}", T::KIND, id)));
    }

    let by_name: Vec<&T> = items.iter().filter(|i| i.is_named(query)).collect();
    match by_name.len() {
        1 => return Ok(by_name[0]),
        0 => {}
        n => {
            return Err(Error::InvalidInput(format!(
                "{} name '{}' is ambiguous ({} matches), use the ID",
                T::KIND,
                query,
                n
            )))
        }
    }

    if query.len() >= MIN_ID_PREFIX {
        let prefix = query.to_lowercase();
        let by_prefix: Vec<&T> = items
            .iter()
            .filter(|i| i.id().to_string().starts_with(&prefix))
            .collect();
        match by_prefix.len() {
            1 => return Ok(by_prefix[0]),
            0 => {}
            _ => {
                return Err(Error::InvalidInput(format!(
                    "{} ID prefix '{}' is ambiguous",
                    T::KIND,
                    query
                )))
            }
        }
    }

    Err(Error::NotFound(format!("{} '{}'", T::KIND, query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_name_id_and_prefix() {
        let members = vec![Member::new("Ada Lovelace".to_string()), Member::new("Grace".to_string())];
        let ada = &members[0];

        assert_eq!(resolve(&members, "ada lovelace").unwrap().id, ada.id);
        assert_eq!(resolve(&members, &ada.id.to_string()).unwrap().id, ada.id);
        assert_eq!(resolve(&members, &ada.id.to_string()[..8]).unwrap().id, ada.id);
    }

    #[test]
    fn test_resolve_errors() {
        let members = vec![Member::new("Sam".to_string()), Member::new("sam".to_string())];
        assert!(matches!(resolve(&members, "SAM"), Err(Error::InvalidInput(_))));
        assert!(matches!(resolve(&members, "Nobody"), Err(Error::NotFound(_))));
        assert!(matches!(resolve(&members, "  "), Err(Error::InvalidInput(_))));
        assert!(matches!(
            resolve(&members, &Uuid::new_v4().to_string()),
            Err(Error::NotFound(_))
        ));
    }
}
