use crate::{css, dom, Page};
use sunshine_core::generate_particles;

/// Appends the `.particles` container and its randomized particles to
/// `<body>`.
pub fn spawn_field(page: &Page) -> anyhow::Result<()> {
    let container = dom::create_div(&page.document)?;
    _ = container.class_list().add_1("particles");
    page.body
        .append_child(&container)
        .map_err(|e| anyhow::anyhow!("append particles: {:?}", e))?;

    let specs = generate_particles(page.config.particles.count, &mut rand::thread_rng());
    for spec in &specs {
        let particle = dom::create_div(&page.document)?;
        _ = particle.class_list().add_1("particle");
        particle.style().set_css_text(&css::particle_style(spec));
        _ = container.append_child(&particle);
    }
    log::debug!("[particles] spawned {}", specs.len());
    Ok(())
}
