// Domain layer: value types shared by the finder, the presenter and the front ends.

pub mod model;
