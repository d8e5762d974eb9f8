use crate::constants::PARTICLE_PAGE_ID;

/// Whether a page with the given `data-page` identity gets the particle
/// backdrop. Only the home page does.
#[inline]
pub fn wants_particle_field(page_id: Option<&str>) -> bool {
    page_id == Some(PARTICLE_PAGE_ID)
}
