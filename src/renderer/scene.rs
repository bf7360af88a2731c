//! Scene drawing: background, ship, asteroids, bullets (in that order)

use glam::Vec2;

use super::shapes::{asteroid_outline, ship_cockpit, ship_hull, ship_thruster, ship_wings};
use super::{PathStyle, Rgb, Surface};
use crate::sim::{Asteroid, Bullet, GameState, Ship, Star, StarTint};

const SPACE: Rgb = Rgb(0x00, 0x00, 0x00);
const HULL: Rgb = Rgb(0x00, 0xff, 0x00);
const HULL_EDGE: Rgb = Rgb(0x00, 0x88, 0x00);
const COCKPIT: Rgb = Rgb(0x00, 0xcc, 0xff);
const THRUSTER: Rgb = Rgb(0xff, 0x66, 0x00);
const ROCK: Rgb = Rgb(0x55, 0x55, 0x55);
const ROCK_EDGE: Rgb = Rgb(0x88, 0x88, 0x88);
const BULLET: Rgb = Rgb(0xff, 0xff, 0xff);

const STAR_GLOW: f32 = 4.0;
const BULLET_GLOW: f32 = 10.0;

/// Star color for a tint
pub fn star_color(tint: StarTint) -> Rgb {
    match tint {
        StarTint::White => Rgb(0xff, 0xff, 0xff),
        StarTint::Blue => Rgb(0xaa, 0xcc, 0xff),
        StarTint::Amber => Rgb(0xff, 0xcc, 0xaa),
    }
}

/// Draw one full frame
pub fn draw_scene<S: Surface>(state: &GameState, surface: &mut S) {
    draw_background(state.arena.size(), &state.stars, surface);
    draw_ship(&state.ship, surface);
    for asteroid in &state.asteroids {
        draw_asteroid(asteroid, surface);
    }
    for bullet in &state.bullets {
        draw_bullet(bullet, surface);
    }
}

fn draw_background<S: Surface>(size: Vec2, stars: &[Star], surface: &mut S) {
    surface.fill_rect(Vec2::ZERO, size, SPACE);
    for star in stars {
        surface.circle(star.pos, star.radius, star_color(star.tint), STAR_GLOW);
    }
}

fn draw_ship<S: Surface>(ship: &Ship, surface: &mut S) {
    let size = ship.size;

    surface.save();
    surface.translate(ship.center());
    surface.rotate(ship.angle);

    surface.polygon(&ship_hull(size), PathStyle::outlined(HULL, HULL_EDGE, 3.0));
    surface.ellipse(
        Vec2::ZERO,
        ship_cockpit(size),
        PathStyle::outlined(COCKPIT, HULL_EDGE, 3.0),
    );
    surface.segments(&ship_wings(size), HULL, 2.0);
    surface.polygon(&ship_thruster(size), PathStyle::filled(THRUSTER));

    surface.restore();
}

fn draw_asteroid<S: Surface>(asteroid: &Asteroid, surface: &mut S) {
    surface.save();
    surface.translate(asteroid.pos);
    surface.rotate(asteroid.angle);
    surface.polygon(
        &asteroid_outline(&asteroid.shape),
        PathStyle::outlined(ROCK, ROCK_EDGE, 2.0),
    );
    surface.restore();
}

fn draw_bullet<S: Surface>(bullet: &Bullet, surface: &mut S) {
    surface.circle(bullet.pos, bullet.radius, BULLET, BULLET_GLOW);
}
