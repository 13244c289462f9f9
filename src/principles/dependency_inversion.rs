//! Dependency inversion: `Research` (high level) asks a
//! `RelationshipBrowser` (abstraction) instead of reading the storage layout
//! of `Relationships` (low level).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipType {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, Default)]
pub struct Relationships {
    relations: Vec<(Person, RelationshipType, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Relationships::default()
    }

    /// Stores the relation in both directions.
    pub fn add_parent_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), RelationshipType::Parent, child.clone()));
        self.relations
            .push((child.clone(), RelationshipType::Child, parent.clone()));
    }

    pub fn add_siblings(&mut self, a: &Person, b: &Person) {
        self.relations
            .push((a.clone(), RelationshipType::Sibling, b.clone()));
        self.relations
            .push((b.clone(), RelationshipType::Sibling, a.clone()));
    }

    /// Raw storage. Code that reads this is tied to the tuple layout.
    pub fn relations(&self) -> &[(Person, RelationshipType, Person)] {
        &self.relations
    }
}

pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|(from, kind, _)| from.name == name && *kind == RelationshipType::Parent)
            .map(|(_, _, to)| to)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Research {
    pub findings: Vec<String>,
}

impl Research {
    pub fn new(browser: &impl RelationshipBrowser, name: &str) -> Self {
        let findings = browser
            .find_all_children_of(name)
            .into_iter()
            .map(|child| format!("{name} is a parent of {}", child.name))
            .collect();
        Research { findings }
    }
}

/// The tightly coupled version: breaks if `Relationships` changes how it
/// stores relations.
pub fn research_tightly_coupled(relationships: &Relationships, name: &str) -> Vec<String> {
    let mut findings = Vec::new();
    for (from, kind, to) in relationships.relations() {
        if from.name == name && *kind == RelationshipType::Parent {
            findings.push(format!("{} is a parent of {}", from.name, to.name));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> Relationships {
        let john = Person::new("John");
        let jane = Person::new("Jane");
        let doe = Person::new("Doe");

        let mut relationships = Relationships::new();
        relationships.add_parent_child(&john, &jane);
        relationships.add_parent_child(&john, &doe);
        relationships.add_siblings(&jane, &doe);
        relationships
    }

    #[test]
    fn test_research_through_abstraction() {
        let research = Research::new(&family(), "John");
        assert_eq!(
            research.findings,
            vec!["John is a parent of Jane", "John is a parent of Doe"]
        );
    }

    #[test]
    fn test_both_routes_agree() {
        let relationships = family();
        assert_eq!(
            research_tightly_coupled(&relationships, "John"),
            Research::new(&relationships, "John").findings
        );
    }

    #[test]
    fn test_children_have_no_children() {
        assert!(family().find_all_children_of("Jane").is_empty());
    }

    #[test]
    fn test_relations_stored_both_ways() {
        let relationships = family();
        assert_eq!(relationships.relations().len(), 6);
    }

    #[test]
    fn test_any_browser_works() {
        struct Fixed(Vec<Person>);

        impl RelationshipBrowser for Fixed {
            fn find_all_children_of(&self, _name: &str) -> Vec<&Person> {
                self.0.iter().collect()
            }
        }

        let research = Research::new(&Fixed(vec![Person::new("Ada")]), "Byron");
        assert_eq!(research.findings, vec!["Byron is a parent of Ada"]);
    }
}
