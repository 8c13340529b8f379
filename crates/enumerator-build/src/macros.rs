//! Build-script helper that writes generated enumerations into `OUT_DIR`.
//!
//! Takes a `Generator`; must be expanded in a function returning
//! `Result<_, Box<dyn std::error::Error>>`. Generated files are named
//! `<snake_type>_enum.rs` and are meant to be `include!`d next to the type.
#[macro_export]
macro_rules! build {
    ($generator:expr) => {
        let generator: $crate::Generator = $generator;

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        for line in generator.rerun_if_changed() {
            println!("{line}");
        }

        // Get the output directory set by Cargo
        let out_dir = ::std::env::var("OUT_DIR")?;

        //
        // ENUMERATIONS
        //

        generator.write_to(::std::path::Path::new(&out_dir))?;
    };
}
