use super::assets::ImageCache;
use cairo::Context;
use circulo_core::scene::{Content, Scene, Visit};
use gdk4::prelude::*;
use std::f64::consts::PI;

pub fn draw(cr: &Context, scene: &Scene, images: &ImageCache) -> Result<(), cairo::Error> {
    let mut result = Ok(());
    scene.visit(|visit| {
        if result.is_ok() {
            result = draw_node(cr, &visit, images);
        }
    });
    result
}

fn draw_node(cr: &Context, visit: &Visit<'_>, images: &ImageCache) -> Result<(), cairo::Error> {
    let world = &visit.world;
    // a zero scale would make the cairo matrix non-invertible
    if visit.opacity <= 0.0 || world.sx == 0.0 || world.sy == 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.translate(world.dx, world.dy);
    cr.scale(world.sx, world.sy);
    let painted = paint(cr, visit, images);
    cr.restore()?;
    painted
}

fn paint(cr: &Context, visit: &Visit<'_>, images: &ImageCache) -> Result<(), cairo::Error> {
    match &visit.node.content {
        Content::Circle { radius, fill } => {
            let (r, g, b, a) = fill.into_components();
            cr.set_source_rgba(r, g, b, a * visit.opacity);
            cr.arc(0.0, 0.0, *radius, 0.0, 2.0 * PI);
            cr.fill()
        }
        Content::Image { asset, origin, .. } => match images.pixbuf(asset) {
            Some(pixbuf) => {
                cr.set_source_pixbuf(pixbuf, origin.x, origin.y);
                cr.paint_with_alpha(visit.opacity)
            }
            None => Ok(()),
        },
        Content::Group(_) => Ok(()),
    }
}
