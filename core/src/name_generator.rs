//! Deterministic specialist name generation using curated name lists.

use crate::rng::DemoRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically.
    pub fn generate_full_name(rng: &mut DemoRng) -> String {
        let first_name = rng.pick(Self::first_names());
        let last_name = rng.pick(Self::last_names());
        format!("{first_name} {last_name}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Paul", "Andrew",
            "Kevin", "Brian", "George", "Edward", "Mary", "Patricia", "Jennifer", "Linda",
            "Barbara", "Elizabeth", "Susan", "Jessica", "Sarah", "Karen", "Nancy", "Margaret",
            "Emily", "Michelle", "Laura", "Anna", "Helen", "Maria", "Olivia", "Sophia",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee",
            "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young",
            "Allen", "King", "Wright", "Scott", "Hill", "Green", "Adams", "Baker",
            "Nelson", "Carter", "Mitchell", "Roberts", "Turner", "Phillips", "Campbell", "Parker",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DemoStream;

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = DemoRng::new(12345, DemoStream::Staff);
        let mut rng2 = DemoRng::new(12345, DemoStream::Staff);
        assert_eq!(
            NameGenerator::generate_full_name(&mut rng1),
            NameGenerator::generate_full_name(&mut rng2),
            "Same seed should produce same name"
        );
    }

    #[test]
    fn generates_valid_full_names() {
        let mut rng = DemoRng::new(12345, DemoStream::Staff);
        for _ in 0..100 {
            let name = NameGenerator::generate_full_name(&mut rng);
            let parts: Vec<&str> = name.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "Name should have exactly 2 parts: {name}");
        }
    }
}
