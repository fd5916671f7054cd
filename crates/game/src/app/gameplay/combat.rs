#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AttackOutcome {
    hits: usize,
    kills: usize,
}

/// Resolves melee swings against the enemy set and owns the swing cooldown.
#[derive(Debug, Clone)]
struct CombatResolver {
    cooldown: Duration,
    slash_lifetime_frames: u32,
}

impl CombatResolver {
    fn new(settings: &SimulationSettings) -> Self {
        Self {
            cooldown: settings.attack_cooldown,
            slash_lifetime_frames: settings.slash_lifetime_frames.max(1),
        }
    }

    /// Swings in the player's facing direction. Returns `None` while a swing is
    /// still in progress.
    fn perform_attack(
        &self,
        player: &mut Player,
        enemies: &mut Vec<Enemy>,
        slashes: &mut Vec<SlashEffect>,
        now: Duration,
    ) -> Option<AttackOutcome> {
        if player.attacking() {
            return None;
        }
        player.attack_ends_at = Some(now.saturating_add(self.cooldown));

        let hitbox = attack_hitbox(player);
        let mut outcome = AttackOutcome::default();
        for enemy in enemies.iter_mut() {
            if overlaps(&hitbox, &enemy.body) {
                enemy.hp = enemy.hp.saturating_sub(1);
                outcome.hits += 1;
                if enemy.is_dead() {
                    outcome.kills += 1;
                }
            }
        }
        enemies.retain(|enemy| !enemy.is_dead());

        slashes.push(SlashEffect {
            body: hitbox,
            timer: self.slash_lifetime_frames,
        });
        Some(outcome)
    }

    /// Clears the swing once its deadline has passed. Returns true on the tick it ends.
    fn expire_attack(player: &mut Player, now: Duration) -> bool {
        match player.attack_ends_at {
            Some(ends_at) if now >= ends_at => {
                player.attack_ends_at = None;
                true
            }
            _ => false,
        }
    }

    fn age_effects(slashes: &mut Vec<SlashEffect>) {
        for slash in slashes.iter_mut() {
            slash.timer = slash.timer.saturating_sub(1);
        }
        slashes.retain(|slash| slash.timer > 0);
    }
}

fn attack_hitbox(player: &Player) -> Rect {
    Rect::new(player.body.x, player.body.y, SLASH_SIZE, SLASH_SIZE)
        .translated(player.facing.offset(SLASH_REACH))
}
