use enumerator_build::{Generator, NamingStrategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enumerator_build::build!(
        Generator::new("src/example.rs")
            .target_with("Kind", NamingStrategy::Pascal, None)
            .target_with("StrKind", NamingStrategy::Pascal, None)
            .target("Level")
            .target_with("Color", NamingStrategy::Kebab, None)
    );

    Ok(())
}
