mod capability;
mod common;
mod normalize;
mod ranking;
