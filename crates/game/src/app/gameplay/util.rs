/// Keyboard and touch are OR'd per axis. Down is checked after up and right
/// after left, so the later direction wins when both are held.
fn movement_delta(input: &InputSnapshot, speed: f32) -> Vec2 {
    let touch = input.touch_axis();
    let mut delta = Vec2::ZERO;
    if input.is_down(InputAction::MoveUp) || touch.y < 0 {
        delta.y = -speed;
    }
    if input.is_down(InputAction::MoveDown) || touch.y > 0 {
        delta.y = speed;
    }
    if input.is_down(InputAction::MoveLeft) || touch.x < 0 {
        delta.x = -speed;
    }
    if input.is_down(InputAction::MoveRight) || touch.x > 0 {
        delta.x = speed;
    }
    delta
}

/// Horizontal movement overrides vertical. Zero input keeps the current facing.
fn facing_for_delta(current: Facing, delta: Vec2) -> Facing {
    let mut facing = current;
    if delta.y < 0.0 {
        facing = Facing::Up;
    }
    if delta.y > 0.0 {
        facing = Facing::Down;
    }
    if delta.x < 0.0 {
        facing = Facing::Left;
    }
    if delta.x > 0.0 {
        facing = Facing::Right;
    }
    facing
}

/// Steps each axis toward `target` independently; diagonal chase is not normalized.
fn chase_step(enemy: &mut Enemy, target: Vec2) {
    let body = &mut enemy.body;
    if body.x < target.x {
        body.x += enemy.speed;
    }
    if body.x > target.x {
        body.x -= enemy.speed;
    }
    if body.y < target.y {
        body.y += enemy.speed;
    }
    if body.y > target.y {
        body.y -= enemy.speed;
    }
}

fn format_cash_out_code(floor: u32, roll: u32) -> String {
    format!("MOM-SAVED-{floor}-{roll}")
}
