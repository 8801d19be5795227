use crate::modules::dogs::core::dog::{Dog, DogKind};

pub fn seed_dogs() -> Vec<Dog> {
    [
        ("Bob", DogKind::Terrier),
        ("Marli", DogKind::Bulldog),
        ("Snoopy", DogKind::Dalmatian),
        ("Rex", DogKind::Dalmatian),
        ("Pongo", DogKind::Dalmatian),
        ("Tillman", DogKind::Bulldog),
        ("Uga", DogKind::Bulldog),
    ]
    .into_iter()
    .zip(0_i64..)
    .map(|((name, kind), pk)| Dog {
        name: name.to_string(),
        pk,
        kind,
    })
    .collect()
}
