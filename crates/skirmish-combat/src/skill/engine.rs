//! Skill execution engine
//!
//! One engine per combatant. It tracks cooldowns for the two bound abilities,
//! runs each ability's activation, and drives the guard-then-counter state
//! machine from the host's per-frame update. All state transitions happen in
//! [`SkillEngine::activate`], [`SkillEngine::on_incoming_attack`] and
//! [`SkillEngine::update`]; there is no background work.

use std::fmt;

use glam::Vec2;
use skirmish_core::EntityId;
use tracing::{debug, info, trace};

use crate::combat::{resolve_ability_damage, CombatStats, Modifier, ModifierKind, StatusEffect};

use super::ability::{
    Ability, AbilityId, BulletClearConfig, ControlRodConfig, GuardCounterConfig, SkillSlot,
    StunBurstConfig, WarpConfig,
};
use super::config::EngineConfig;
use super::control_rod::ControlRodState;
use super::cooldown::CooldownBook;
use super::feedback::{CombatFeedback, NoFeedback};
use super::geometry::{direction_angle, within_radius, Trapezoid};
use super::guard::{CounterOutcome, GuardPhase, GuardResolution};
use super::traits::{CombatTarget, Combatant, Projectile, SkillContext};

pub struct SkillEngine {
    owner: EntityId,
    config: EngineConfig,
    cooldowns: CooldownBook,
    guard: GuardPhase,
    control_rod: ControlRodState,
    feedback: Box<dyn CombatFeedback>,
}

impl fmt::Debug for SkillEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillEngine")
            .field("owner", &self.owner)
            .field("config", &self.config)
            .field("cooldowns", &self.cooldowns)
            .field("guard", &self.guard)
            .field("control_rod", &self.control_rod)
            .finish_non_exhaustive()
    }
}

impl SkillEngine {
    /// Create an engine for `owner` with no feedback sink.
    ///
    /// `config` is expected to have passed [`EngineConfig::validate`].
    pub fn new(owner: EntityId, config: EngineConfig) -> Self {
        Self::with_feedback(owner, config, Box::new(NoFeedback))
    }

    /// Create an engine that reports side effects to `feedback`
    pub fn with_feedback(
        owner: EntityId,
        config: EngineConfig,
        feedback: Box<dyn CombatFeedback>,
    ) -> Self {
        Self {
            owner,
            config,
            cooldowns: CooldownBook::new(),
            guard: GuardPhase::Idle,
            control_rod: ControlRodState::default(),
            feedback,
        }
    }

    pub fn owner(&self) -> EntityId {
        self.owner
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ability bound to `slot`
    pub fn ability(&self, slot: SkillSlot) -> &Ability {
        self.config.loadout.get(slot)
    }

    /// Only one multi-phase ability may be in flight across both slots
    pub fn can_activate(&self, slot: SkillSlot, now_ms: f64) -> bool {
        if self.guard.is_active() {
            return false;
        }
        self.cooldowns.is_ready(self.ability(slot).id(), now_ms)
    }

    /// Remaining cooldown in milliseconds, never negative
    pub fn cooldown_remaining(&self, slot: SkillSlot, now_ms: f64) -> f64 {
        self.cooldowns.remaining(self.ability(slot).id(), now_ms)
    }

    /// Cooldown progress as a 0.0-1.0 fraction (1.0 = ready)
    pub fn cooldown_fraction(&self, slot: SkillSlot, now_ms: f64) -> f32 {
        let full = self.ability(slot).cooldown_ms();
        if full <= 0.0 {
            return 1.0;
        }
        (1.0 - self.cooldown_remaining(slot, now_ms) / full).clamp(0.0, 1.0) as f32
    }

    /// Try to activate the ability in `slot`, aimed at `aim`.
    ///
    /// Returns false without side effects if the slot is not ready. On success
    /// the full cooldown is committed immediately, even for the guard ability.
    pub fn activate<C, E, P>(
        &mut self,
        slot: SkillSlot,
        now_ms: f64,
        aim: Vec2,
        ctx: &mut SkillContext<'_, C, E, P>,
    ) -> bool
    where
        C: Combatant + ?Sized,
        E: CombatTarget,
        P: Projectile,
    {
        let ability = *self.ability(slot);
        if !self.can_activate(slot, now_ms) {
            debug!(ability = %ability.id(), ?slot, now_ms, "activation rejected");
            return false;
        }

        self.cooldowns
            .commit(ability.id(), now_ms, ability.cooldown_ms());

        match ability {
            Ability::Warp(c) => self.warp(&c, aim, ctx),
            Ability::StunBurst(c) => self.stun_burst(&c, ctx),
            Ability::GuardCounter(c) => self.begin_guard(c, aim, ctx),
            Ability::ControlRod(c) => self.control_rod(&c, ctx),
            Ability::BulletClear(c) => self.bullet_clear(&c, ctx),
        }

        debug!(ability = %ability.id(), ?slot, now_ms, "ability activated");
        self.feedback.ability_activated(ability.id());
        true
    }

    /// Called before an attack against the owner is committed.
    ///
    /// Returns true if the guard window is open and the attack is nullified;
    /// the caller must then discard the damage.
    pub fn on_incoming_attack(&mut self) -> bool {
        if !self.guard.block() {
            return false;
        }
        info!(owner = ?self.owner, "attack blocked");
        self.feedback.attack_blocked();
        true
    }

    /// Per-frame update. Returns the counter outcome on the tick a guard resolves.
    pub fn update<C, E, P>(
        &mut self,
        now_ms: f64,
        delta_ms: f64,
        ctx: &mut SkillContext<'_, C, E, P>,
    ) -> Option<CounterOutcome>
    where
        C: Combatant + ?Sized,
        E: CombatTarget,
        P: Projectile,
    {
        self.control_rod.tick(delta_ms);
        self.guard.tick(delta_ms);

        let resolution = self.guard.take_resolution()?;
        let outcome = self.resolve_counter(&resolution, now_ms, ctx);
        self.feedback.counter_resolved(&outcome);
        Some(outcome)
    }

    pub fn guard_phase(&self) -> &GuardPhase {
        &self.guard
    }

    /// Untargetable while the guard window is open
    pub fn is_invulnerable(&self) -> bool {
        self.guard.is_guarding()
    }

    /// Rooted in place while the guard window is open
    pub fn is_immobile(&self) -> bool {
        self.guard.is_guarding()
    }

    pub fn control_rod_state(&self) -> &ControlRodState {
        &self.control_rod
    }

    /// Extra range granted by an active control rod
    pub fn range_bonus(&self) -> f32 {
        self.control_rod.range_bonus()
    }

    // ---- Ability behaviors ----

    fn warp<C, E, P>(&mut self, config: &WarpConfig, aim: Vec2, ctx: &mut SkillContext<'_, C, E, P>)
    where
        C: Combatant + ?Sized,
    {
        let from = ctx.caster.position();
        let offset = aim - from;
        let distance = offset.length();
        let target = if distance > config.max_range {
            from + offset / distance * config.max_range
        } else {
            aim
        };
        let landed = self.config.bounds.clamp(target);
        trace!(?from, ?landed, "warp");
        ctx.caster.set_position(landed);
    }

    fn stun_burst<C, E, P>(&mut self, config: &StunBurstConfig, ctx: &mut SkillContext<'_, C, E, P>)
    where
        C: Combatant + ?Sized,
        E: CombatTarget,
    {
        let center = ctx.caster.position();
        let mut stunned = 0;
        for enemy in ctx.enemies.iter_mut() {
            if !enemy.is_active() || !enemy.is_alive() {
                continue;
            }
            if !within_radius(center, enemy.position(), config.radius + enemy.hitbox_radius()) {
                continue;
            }
            if enemy.apply_status(StatusEffect::stun(config.stun_ms, self.owner)) {
                stunned += 1;
            }
        }
        debug!(stunned, "stun burst");
        self.feedback.targets_stunned(stunned);
    }

    fn begin_guard<C, E, P>(
        &mut self,
        config: GuardCounterConfig,
        aim: Vec2,
        ctx: &mut SkillContext<'_, C, E, P>,
    ) where
        C: Combatant + ?Sized,
    {
        let direction = direction_angle(ctx.caster.position(), aim);
        self.guard = GuardPhase::begin(direction, config);
    }

    fn control_rod<C, E, P>(&mut self, config: &ControlRodConfig, ctx: &mut SkillContext<'_, C, E, P>)
    where
        C: Combatant + ?Sized,
    {
        ctx.caster.ledger_mut().add_modifier(Modifier::new(
            ModifierKind::AttackPower,
            config.attack_multiplier,
            config.duration_ms,
            self.owner,
        ));
        self.control_rod.start(config.duration_ms, config.range_bonus);
    }

    fn bullet_clear<C, E, P>(&mut self, config: &BulletClearConfig, ctx: &mut SkillContext<'_, C, E, P>)
    where
        C: Combatant + ?Sized,
        P: Projectile,
    {
        let center = ctx.caster.position();
        let mut cleared = 0;
        for bullet in ctx.projectiles.iter_mut() {
            if bullet.is_active() && within_radius(center, bullet.position(), config.radius) {
                bullet.deactivate();
                cleared += 1;
            }
        }
        debug!(cleared, "bullet clear");
        self.feedback.projectiles_cleared(cleared);
    }

    /// Counter only fires after a block; a block also refunds part of the cooldown
    fn resolve_counter<C, E, P>(
        &mut self,
        resolution: &GuardResolution,
        now_ms: f64,
        ctx: &mut SkillContext<'_, C, E, P>,
    ) -> CounterOutcome
    where
        C: Combatant + ?Sized,
        E: CombatTarget,
    {
        let mut outcome = CounterOutcome {
            blocked: resolution.blocked_attack,
            ..Default::default()
        };
        if !resolution.blocked_attack {
            debug!("guard expired without a block");
            return outcome;
        }

        let config = &resolution.config;
        let area = Trapezoid {
            origin: ctx.caster.position(),
            angle: resolution.attack_direction,
            near_width: config.near_width,
            far_width: config.far_width,
            length: config.length,
        };
        let attacker = ctx.caster.effective_stats();

        for enemy in ctx.enemies.iter_mut() {
            if !enemy.is_active() || !enemy.is_alive() || !area.contains(enemy.position()) {
                continue;
            }
            let defender = CombatStats::defender(enemy.defense());
            let result = resolve_ability_damage(&attacker, &defender, &config.damage);
            let destroyed = enemy.take_damage(result.final_damage);
            trace!(damage = result.final_damage, destroyed, "counter hit");

            outcome.hits += 1;
            outcome.total_damage += result.final_damage;
            if destroyed {
                outcome.kills += 1;
            }
        }

        self.cooldowns
            .reduce_remaining(AbilityId::GuardCounter, now_ms, config.refund_fraction);
        info!(
            hits = outcome.hits,
            kills = outcome.kills,
            damage = outcome.total_damage,
            "counter resolved"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{AbilityDamage, ModifierLedger, StatusKind};
    use crate::fighter::Fighter;
    use crate::skill::config::SkillLoadout;
    use skirmish_core::ArenaBounds;

    struct Dummy {
        position: Vec2,
        hp: f32,
        active: bool,
        ledger: ModifierLedger,
    }

    impl Dummy {
        fn at(x: f32, y: f32) -> Self {
            Self {
                position: Vec2::new(x, y),
                hp: 1000.0,
                active: true,
                ledger: ModifierLedger::new(),
            }
        }
    }

    impl CombatTarget for Dummy {
        fn is_active(&self) -> bool {
            self.active
        }
        fn is_alive(&self) -> bool {
            self.hp > 0.0
        }
        fn position(&self) -> Vec2 {
            self.position
        }
        fn defense(&self) -> f32 {
            0.0
        }
        fn hitbox_radius(&self) -> f32 {
            0.0
        }
        fn take_damage(&mut self, amount: f32) -> bool {
            self.hp -= amount;
            self.hp <= 0.0
        }
        fn apply_status(&mut self, effect: StatusEffect) -> bool {
            self.ledger.apply_status(effect)
        }
    }

    struct Bullet {
        position: Vec2,
        active: bool,
    }

    impl Projectile for Bullet {
        fn is_active(&self) -> bool {
            self.active
        }
        fn position(&self) -> Vec2 {
            self.position
        }
        fn deactivate(&mut self) {
            self.active = false;
        }
    }

    fn guard_config() -> GuardCounterConfig {
        GuardCounterConfig {
            cooldown_ms: 10_000.0,
            guard_ms: 500.0,
            near_width: 40.0,
            far_width: 80.0,
            length: 100.0,
            damage: AbilityDamage::scaling(1.0),
            refund_fraction: 0.5,
        }
    }

    fn engine(primary: Ability, secondary: Ability) -> SkillEngine {
        let config = EngineConfig {
            bounds: ArenaBounds::new(Vec2::ZERO, Vec2::new(1000.0, 1000.0)),
            loadout: SkillLoadout::new(primary, secondary),
        };
        SkillEngine::new(EntityId::new(), config)
    }

    fn caster() -> Fighter {
        Fighter::new(
            Vec2::new(100.0, 100.0),
            CombatStats {
                attack_power: 100.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_guard_locks_out_both_slots() {
        let mut engine = engine(
            Ability::GuardCounter(guard_config()),
            Ability::ControlRod(ControlRodConfig::default()),
        );
        let mut me = caster();
        let mut enemies: Vec<Dummy> = Vec::new();
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        assert!(engine.activate(SkillSlot::Primary, 0.0, Vec2::new(200.0, 100.0), &mut ctx));
        assert!(engine.guard_phase().is_guarding());
        assert!(engine.is_invulnerable());
        assert!(engine.is_immobile());

        assert!(!engine.activate(SkillSlot::Primary, 10.0, Vec2::ZERO, &mut ctx));
        assert!(!engine.can_activate(SkillSlot::Secondary, 10.0));
        assert!(!engine.activate(SkillSlot::Secondary, 10.0, Vec2::ZERO, &mut ctx));
        assert!(ctx.caster.ledger.modifiers().is_empty());

        engine.update(500.0, 500.0, &mut ctx);
        assert!(!engine.guard_phase().is_active());
        assert!(!engine.is_invulnerable());
        assert!(engine.can_activate(SkillSlot::Secondary, 500.0));
    }

    #[test]
    fn test_blocked_counter_hits_only_inside_trapezoid() {
        let mut engine = engine(
            Ability::GuardCounter(guard_config()),
            Ability::Warp(WarpConfig::default()),
        );
        let mut me = caster();
        let mut enemies = vec![
            Dummy::at(100.0, 100.0), // forward = 0
            Dummy::at(100.0, 120.0), // forward = 0, |right| = near half
            Dummy::at(200.0, 140.0), // forward = L, |right| = far half
            Dummy::at(150.0, 130.0), // interpolated edge
            Dummy::at(99.5, 100.0),  // behind
            Dummy::at(200.5, 100.0), // beyond the far edge
            Dummy::at(150.0, 130.5), // just outside the side
        ];
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        assert!(engine.activate(SkillSlot::Primary, 1000.0, Vec2::new(300.0, 100.0), &mut ctx));
        assert!(engine.update(1250.0, 250.0, &mut ctx).is_none());
        assert!(engine.on_incoming_attack());

        let outcome = engine.update(1500.0, 250.0, &mut ctx).unwrap();
        assert!(outcome.blocked);
        assert_eq!(outcome.hits, 4);
        assert_eq!(outcome.kills, 0);
        assert_eq!(outcome.total_damage, 400.0);

        let hp: Vec<f32> = enemies.iter().map(|e| e.hp).collect();
        assert_eq!(hp, vec![900.0, 900.0, 900.0, 900.0, 1000.0, 1000.0, 1000.0]);

        // 9500 left at resolution, halved
        assert_eq!(engine.cooldown_remaining(SkillSlot::Primary, 1500.0), 4750.0);
    }

    #[test]
    fn test_counter_area_follows_guard_aim() {
        let mut engine = engine(
            Ability::GuardCounter(guard_config()),
            Ability::Warp(WarpConfig::default()),
        );
        let mut me = caster();
        let mut enemies = vec![
            Dummy::at(100.0, 150.0), // along the aim (+y)
            Dummy::at(130.0, 190.0), // inside the widened far end
            Dummy::at(150.0, 100.0), // on +x, where an unrotated counter would land
            Dummy::at(100.0, 50.0),  // behind the aim
        ];
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        assert!(engine.activate(SkillSlot::Primary, 0.0, Vec2::new(100.0, 300.0), &mut ctx));
        assert!(engine.on_incoming_attack());
        let outcome = engine.update(500.0, 500.0, &mut ctx).unwrap();
        assert_eq!(outcome.hits, 2);

        let hp: Vec<f32> = enemies.iter().map(|e| e.hp).collect();
        assert_eq!(hp, vec![900.0, 900.0, 1000.0, 1000.0]);
    }

    #[test]
    fn test_unblocked_guard_deals_nothing_and_keeps_cooldown() {
        let mut engine = engine(
            Ability::GuardCounter(guard_config()),
            Ability::Warp(WarpConfig::default()),
        );
        let mut me = caster();
        let mut enemies = vec![Dummy::at(150.0, 100.0)];
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        engine.activate(SkillSlot::Primary, 1000.0, Vec2::new(300.0, 100.0), &mut ctx);
        let outcome = engine.update(1500.0, 500.0, &mut ctx).unwrap();
        assert!(!outcome.blocked);
        assert_eq!(outcome.hits, 0);
        assert_eq!(enemies[0].hp, 1000.0);
        assert_eq!(engine.cooldown_remaining(SkillSlot::Primary, 1500.0), 9500.0);
    }

    #[test]
    fn test_incoming_attack_outside_window() {
        let mut engine = engine(
            Ability::GuardCounter(guard_config()),
            Ability::Warp(WarpConfig::default()),
        );
        assert!(!engine.on_incoming_attack());
    }

    #[test]
    fn test_counter_uses_effective_attack_power() {
        let mut engine = engine(
            Ability::GuardCounter(guard_config()),
            Ability::Warp(WarpConfig::default()),
        );
        let mut me = caster();
        me.ledger.add_modifier(Modifier::new(
            ModifierKind::AttackPower,
            2.0,
            10_000.0,
            EntityId::new(),
        ));
        let mut enemies = vec![Dummy::at(150.0, 100.0)];
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        engine.activate(SkillSlot::Primary, 0.0, Vec2::new(300.0, 100.0), &mut ctx);
        engine.on_incoming_attack();
        let outcome = engine.update(500.0, 500.0, &mut ctx).unwrap();
        assert_eq!(outcome.total_damage, 200.0);
    }

    #[test]
    fn test_warp_clamps_to_range_and_bounds() {
        let mut engine = engine(
            Ability::Warp(WarpConfig {
                cooldown_ms: 1000.0,
                max_range: 50.0,
            }),
            Ability::BulletClear(BulletClearConfig::default()),
        );
        let mut me = caster();
        let mut enemies: Vec<Dummy> = Vec::new();
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        // Within range: land on the aim point
        assert!(engine.activate(SkillSlot::Primary, 0.0, Vec2::new(130.0, 140.0), &mut ctx));
        assert_eq!(ctx.caster.position, Vec2::new(130.0, 140.0));

        // Beyond range: clamp along the aim direction
        assert!(engine.activate(SkillSlot::Primary, 1000.0, Vec2::new(430.0, 140.0), &mut ctx));
        assert_eq!(ctx.caster.position, Vec2::new(180.0, 140.0));

        // Out of bounds: stay inside the arena
        ctx.caster.position = Vec2::new(10.0, 500.0);
        assert!(engine.activate(SkillSlot::Primary, 2000.0, Vec2::new(-100.0, 500.0), &mut ctx));
        assert_eq!(ctx.caster.position, Vec2::new(0.0, 500.0));
    }

    #[test]
    fn test_stun_burst() {
        let mut engine = engine(
            Ability::StunBurst(StunBurstConfig {
                cooldown_ms: 5000.0,
                radius: 50.0,
                stun_ms: 1000.0,
            }),
            Ability::Warp(WarpConfig::default()),
        );
        let mut me = caster();
        let mut immune = Dummy::at(110.0, 100.0);
        immune.ledger.apply_status(StatusEffect::new(
            StatusKind::CcImmune,
            5000.0,
            EntityId::new(),
        ));
        let mut inactive = Dummy::at(100.0, 110.0);
        inactive.active = false;
        let mut enemies = vec![
            Dummy::at(130.0, 140.0), // distance 50, on the edge
            Dummy::at(200.0, 100.0), // too far
            immune,
            inactive,
        ];
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        assert!(engine.activate(SkillSlot::Primary, 0.0, Vec2::ZERO, &mut ctx));
        assert!(enemies[0].ledger.is_stunned());
        assert!(!enemies[1].ledger.is_stunned());
        assert!(!enemies[2].ledger.is_stunned());
        assert!(!enemies[3].ledger.is_stunned());
    }

    #[test]
    fn test_control_rod_buff_and_range() {
        let mut engine = engine(
            Ability::ControlRod(ControlRodConfig {
                cooldown_ms: 20_000.0,
                duration_ms: 3000.0,
                attack_multiplier: 1.5,
                range_bonus: 80.0,
            }),
            Ability::Warp(WarpConfig::default()),
        );
        let mut me = caster();
        let mut enemies: Vec<Dummy> = Vec::new();
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        assert_eq!(engine.range_bonus(), 0.0);
        assert!(engine.activate(SkillSlot::Primary, 0.0, Vec2::ZERO, &mut ctx));
        assert_eq!(engine.range_bonus(), 80.0);
        assert_eq!(ctx.caster.effective_stats().attack_power, 150.0);

        engine.update(3000.0, 3000.0, &mut ctx);
        ctx.caster.tick(3000.0);
        assert_eq!(engine.range_bonus(), 0.0);
        assert_eq!(ctx.caster.effective_stats().attack_power, 100.0);
    }

    #[test]
    fn test_bullet_clear() {
        let mut engine = engine(
            Ability::BulletClear(BulletClearConfig {
                cooldown_ms: 1000.0,
                radius: 30.0,
            }),
            Ability::Warp(WarpConfig::default()),
        );
        let mut me = caster();
        let mut enemies: Vec<Dummy> = Vec::new();
        let mut bullets = vec![
            Bullet {
                position: Vec2::new(120.0, 100.0),
                active: true,
            },
            Bullet {
                position: Vec2::new(100.0, 131.0),
                active: true,
            },
        ];
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        assert!(engine.activate(SkillSlot::Primary, 0.0, Vec2::ZERO, &mut ctx));
        assert!(!bullets[0].active);
        assert!(bullets[1].active);
    }

    #[test]
    fn test_cooldown_rejects_without_side_effects() {
        let mut engine = engine(
            Ability::Warp(WarpConfig {
                cooldown_ms: 1000.0,
                max_range: 500.0,
            }),
            Ability::BulletClear(BulletClearConfig::default()),
        );
        let mut me = caster();
        let mut enemies: Vec<Dummy> = Vec::new();
        let mut bullets: Vec<Bullet> = Vec::new();
        let mut ctx = SkillContext::new(&mut me, &mut enemies, &mut bullets);

        assert_eq!(engine.cooldown_fraction(SkillSlot::Primary, 0.0), 1.0);
        assert!(engine.activate(SkillSlot::Primary, 0.0, Vec2::new(200.0, 100.0), &mut ctx));
        assert_eq!(engine.cooldown_remaining(SkillSlot::Primary, 250.0), 750.0);
        assert_eq!(engine.cooldown_fraction(SkillSlot::Primary, 250.0), 0.25);

        assert!(!engine.activate(SkillSlot::Primary, 500.0, Vec2::new(300.0, 300.0), &mut ctx));
        assert_eq!(ctx.caster.position, Vec2::new(200.0, 100.0));
        assert_eq!(engine.cooldown_remaining(SkillSlot::Primary, 500.0), 500.0);

        // The other slot has its own timer
        assert!(engine.can_activate(SkillSlot::Secondary, 500.0));
        assert!(engine.can_activate(SkillSlot::Primary, 1000.0));
        assert_eq!(engine.cooldown_remaining(SkillSlot::Primary, 4000.0), 0.0);
    }
}
