use glam::vec2;
use crate::{
    components::*,
    constants::{HIGH_SCORE_TEXT_TOP_OFFSET, SCORE_TEXT_BOTTOM_OFFSET},
    platform::{Platform, SpriteDraw, TextPlacement},
    score::format_score,
    sprites::SpriteKind,
    Game
};

impl Game {
    pub(crate) fn render<P: Platform>(&mut self, platform: &mut P) {
        platform.draw_background();

        { // asteroids
            for (_, (_, position, rotation)) in self.ecs_world
                .query::<(&Asteroid, &Position, &Rotation)>()
                .iter() {
                let mask = self.sprites.rotated(SpriteKind::Asteroid, rotation.angle);
                platform.draw_sprite(SpriteDraw {
                    kind: SpriteKind::Asteroid,
                    center: position.0,
                    angle: rotation.angle,
                    top_left: mask.top_left(position.0),
                    mask: &mask
                });
            }
        }

        { // bullets
            for (_, (_, position, rotation)) in self.ecs_world
                .query::<(&Bullet, &Position, &Rotation)>()
                .iter() {
                let mask = self.sprites.rotated(SpriteKind::Bullet, rotation.angle);
                platform.draw_sprite(SpriteDraw {
                    kind: SpriteKind::Bullet,
                    center: position.0,
                    angle: rotation.angle,
                    top_left: mask.top_left(position.0),
                    mask: &mask
                });
            }
        }

        { // player
            for (_, (_, position, rotation)) in self.ecs_world
                .query::<(&Player, &Position, &Rotation)>()
                .iter() {
                let mask = self.sprites.rotated(SpriteKind::Ship, rotation.angle);
                platform.draw_sprite(SpriteDraw {
                    kind: SpriteKind::Ship,
                    center: position.0,
                    angle: rotation.angle,
                    top_left: mask.top_left(position.0),
                    mask: &mask
                });
            }
        }

        { // explosions
            for (_, (explosion, position)) in self.ecs_world
                .query::<(&Explosion, &Position)>()
                .iter() {
                platform.draw_explosion(position.0, explosion.frame);
            }
        }

        let (width, height) = (self.config.window_width, self.config.window_height);
        platform.draw_text(
            &format_score(self.score()),
            TextPlacement {
                mid_bottom: vec2(width / 2.0, height - SCORE_TEXT_BOTTOM_OFFSET),
                framed: true
            }
        );
        platform.draw_text(
            &format!("Best: {}", self.high_score()),
            TextPlacement {
                mid_bottom: vec2(width / 2.0, HIGH_SCORE_TEXT_TOP_OFFSET),
                framed: false
            }
        );
    }
}
