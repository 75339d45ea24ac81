#[allow(clippy::module_inception)]
pub(crate) mod movie;
pub(crate) mod track;

#[cfg(test)]
#[path = "../../tests/unit/movie/track.rs"]
mod tests;
