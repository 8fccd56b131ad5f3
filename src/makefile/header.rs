//! Header comment identifying the generator and when it ran

use super::RenderContext;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let libraries: Vec<&str> = ctx
        .config
        .enabled_libraries()
        .iter()
        .map(|lib| lib.name())
        .collect();
    let libraries = if libraries.is_empty() {
        "none".to_string()
    } else {
        libraries.join(", ")
    };

    format!(
        "# makefile generated by {} {} on {}\n\
         #\n\
         # libraries: {}\n\
         # this file is yours now, nothing regenerates it\n",
        env!("CARGO_PKG_NAME"),
        crate::VERSION,
        ctx.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        libraries
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Flags;
    use crate::makefile::tests::{config_for, fixed_time};

    #[test]
    fn test_header_names_generator_and_time() {
        let config = config_for(Flags::default());
        let text = render(&RenderContext {
            config: &config,
            generated_at: fixed_time(),
        });

        assert!(text.starts_with(&format!("# makefile generated by cxxinit {} ", crate::VERSION)));
        assert!(text.contains("on 2024-03-01 09:30:00 UTC"));
        assert!(text.contains("# libraries: none"));
    }

    #[test]
    fn test_header_lists_libraries() {
        let config = config_for(Flags {
            root: true,
            hdf5: true,
            python_module: Some("pymod".into()),
            ..Default::default()
        });
        let text = render(&RenderContext {
            config: &config,
            generated_at: fixed_time(),
        });

        assert!(text.contains("# libraries: ROOT, HDF5, Python"));
    }
}
