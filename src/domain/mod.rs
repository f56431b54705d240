// Domain layer: the submission model, banners, and the capability ports the
// handlers are written against. Nothing in here touches the DOM.

pub mod model;
pub mod ports;
