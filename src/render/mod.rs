pub(crate) mod color;
pub(crate) mod raster;
pub(crate) mod sequence;
pub(crate) mod svg;
