use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyState {
    /// Top-left corner where the level placed it.
    pub spawn: Vec2,
    /// Level that owns the key when nobody holds it.
    pub home: Hue,
    pub following: bool,
    pub name: Option<String>,
}

/// Pulls the key toward `target`, staying put inside the inner radius and never
/// trailing further behind than the outer one.
pub fn follow(body: &mut Body, target: IVec2, dt: f32, config: &config::KeyConfig) {
    let delta = (target - body.bounds.center()).as_vec2();
    let distance = delta.length();
    if distance <= config.follow_min {
        return;
    }
    let step = if distance > config.follow_max + config.speed * dt {
        scale_vector(delta, distance - config.follow_max)
    } else {
        scale_vector(delta, config.speed * dt)
    };
    body.translate(1.0, step);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_at(x: f32) -> Body {
        Body::new(Vec2::new(x, 0.0), IVec2::new(40, 24))
    }

    #[test]
    fn stays_inside_inner_radius() {
        let config = Config::default().key;
        let mut body = key_at(0.0);
        let center = body.bounds.center();
        follow(&mut body, center + IVec2::new(20, 0), 1.0 / 60.0, &config);
        assert_eq!(body.pos, Vec2::ZERO);
    }

    #[test]
    fn moves_linearly_inside_outer_radius() {
        let config = Config::default().key;
        let mut body = key_at(0.0);
        let center = body.bounds.center();
        follow(&mut body, center + IVec2::new(40, 0), 1.0 / 60.0, &config);
        assert!((body.pos.x - 200.0 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn snaps_to_outer_radius_when_far() {
        let config = Config::default().key;
        let mut body = key_at(0.0);
        let center = body.bounds.center();
        follow(&mut body, center + IVec2::new(500, 0), 1.0 / 60.0, &config);
        assert!((body.pos.x - (500.0 - 48.0)).abs() < 1e-3);
    }
}
