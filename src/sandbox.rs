//! Headless encounter loop
//!
//! Plays the host role around the combat core: owns the player, the enemy
//! wave and the enemy bullets, feeds the skill engine a fixed sequence of
//! `(now_ms, delta_ms)` frames, and routes every hit through the guard check
//! before committing HP loss.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use skirmish_combat::{
    attack_interval_ms, resolve_basic_attack, resolve_true_damage, AbilityId, CombatFeedback,
    CounterOutcome, Fighter, Projectile, SeededRng, SkillContext, SkillEngine, SkillSlot,
};
use skirmish_core::{ClockConfig, SimClock, Vec2};
use tracing::{debug, info};

use crate::settings::SandboxSettings;

const BULLET_HIT_RADIUS: f32 = 8.0;

/// An enemy bullet flying in a straight line
#[derive(Debug, Clone)]
pub struct EnemyBullet {
    position: Vec2,
    /// Units per millisecond
    velocity: Vec2,
    active: bool,
}

impl Projectile for EnemyBullet {
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

/// Presentation hooks, tallied instead of played
#[derive(Debug, Default)]
struct Tally {
    activations: BTreeMap<String, usize>,
    blocks: usize,
    counters: usize,
    counter_hits: usize,
    stunned: usize,
    bullets_cleared: usize,
}

#[derive(Clone, Default)]
struct TallyFeedback(Rc<RefCell<Tally>>);

impl CombatFeedback for TallyFeedback {
    fn ability_activated(&mut self, id: AbilityId) {
        debug!(cue = "ability", %id);
        *self.0.borrow_mut().activations.entry(id.to_string()).or_default() += 1;
    }

    fn attack_blocked(&mut self) {
        debug!(cue = "block");
        self.0.borrow_mut().blocks += 1;
    }

    fn counter_resolved(&mut self, outcome: &CounterOutcome) {
        let mut tally = self.0.borrow_mut();
        if outcome.blocked {
            tally.counters += 1;
            tally.counter_hits += outcome.hits;
        }
    }

    fn targets_stunned(&mut self, count: usize) {
        self.0.borrow_mut().stunned += count;
    }

    fn projectiles_cleared(&mut self, count: usize) {
        self.0.borrow_mut().bullets_cleared += count;
    }
}

/// Summary printed at the end of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub seed: Option<u64>,
    pub frames: u64,
    pub steps: u64,
    pub elapsed_ms: f64,
    pub player_hp: f32,
    pub player_survived: bool,
    pub enemies_defeated: usize,
    pub enemies_remaining: usize,
    pub player_damage_dealt: f32,
    pub player_crits: usize,
    pub damage_taken: f32,
    pub hits_blocked: usize,
    pub counters: usize,
    pub counter_hits: usize,
    pub enemies_stunned: usize,
    pub bullets_cleared: usize,
    pub abilities_used: BTreeMap<String, usize>,
}

/// Index and distance of the closest live enemy
fn nearest_enemy(from: Vec2, enemies: &[Fighter]) -> Option<(usize, f32)> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.active && e.is_alive())
        .map(|(i, e)| (i, from.distance(e.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Everything the host owns for one encounter
struct Session<'s> {
    settings: &'s SandboxSettings,
    rng: SeededRng,
    engine: SkillEngine,
    tally: TallyFeedback,
    player: Fighter,
    enemies: Vec<Fighter>,
    bullets: Vec<EnemyBullet>,
    player_next_attack: f64,
    enemy_next_attack: Vec<f64>,
    next_volley: f64,
    damage_dealt: f32,
    crits: usize,
    damage_taken: f32,
}

impl<'s> Session<'s> {
    fn new(settings: &'s SandboxSettings) -> Self {
        let scenario = &settings.scenario;
        let rng = match scenario.seed {
            Some(seed) => SeededRng::from_seed(seed),
            None => SeededRng::from_entropy(),
        };

        let center = settings.engine.bounds.center();
        let player = Fighter::new(center, scenario.player);
        let tally = TallyFeedback::default();
        let engine = SkillEngine::with_feedback(
            player.id,
            settings.engine.clone(),
            Box::new(tally.clone()),
        );

        let enemies: Vec<Fighter> = (0..scenario.enemy_count)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / scenario.enemy_count.max(1) as f32;
                let offset = Vec2::from_angle(angle) * scenario.spawn_radius;
                Fighter::new(settings.engine.bounds.clamp(center + offset), scenario.enemy)
            })
            .collect();

        Self {
            settings,
            rng,
            engine,
            tally,
            player,
            enemy_next_attack: vec![0.0; enemies.len()],
            enemies,
            bullets: Vec::new(),
            player_next_attack: 0.0,
            next_volley: scenario.volley_interval_ms,
            damage_dealt: 0.0,
            crits: 0,
            damage_taken: 0.0,
        }
    }

    fn is_over(&self) -> bool {
        !self.player.is_alive() || self.enemies.iter().all(|e| !e.is_alive())
    }

    /// Advance the encounter by one fixed step ending at `now`
    fn step(&mut self, now: f64, delta: f64) {
        self.enemies_act(now, delta);
        self.fire_volley(now);
        self.move_bullets(delta);
        if !self.player.is_alive() {
            return;
        }
        self.player_acts(now);

        {
            let mut ctx =
                SkillContext::new(&mut self.player, &mut self.enemies, &mut self.bullets);
            if let Some(outcome) = self.engine.update(now, delta, &mut ctx) {
                self.damage_dealt += outcome.total_damage;
            }
        }

        self.player.tick(delta);
        for enemy in self.enemies.iter_mut() {
            enemy.tick(delta);
        }
    }

    fn enemies_act(&mut self, now: f64, delta: f64) {
        let scenario = &self.settings.scenario;
        for (i, enemy) in self.enemies.iter_mut().enumerate() {
            if !enemy.active || !enemy.is_alive() {
                continue;
            }
            let to_player = self.player.position - enemy.position;
            let distance = to_player.length();

            if distance > scenario.enemy_range {
                let step = enemy.current_move_speed() * (delta / 1000.0) as f32;
                enemy.position += to_player / distance * step.min(distance - scenario.enemy_range);
                continue;
            }

            if enemy.ledger.is_stunned() || now < self.enemy_next_attack[i] {
                continue;
            }
            let stats = enemy.effective_stats();
            self.enemy_next_attack[i] = now + attack_interval_ms(stats.attack_speed) as f64;
            let hit = resolve_basic_attack(&stats, &self.player.effective_stats(), &mut self.rng);
            if self.player.receive_hit(&mut self.engine, hit.final_damage).is_some() {
                self.damage_taken += hit.final_damage;
            }
        }
    }

    fn fire_volley(&mut self, now: f64) {
        if now < self.next_volley {
            return;
        }
        let scenario = &self.settings.scenario;
        self.next_volley += scenario.volley_interval_ms;
        for enemy in self.enemies.iter().filter(|e| e.active && e.is_alive()) {
            if enemy.ledger.is_stunned() {
                continue;
            }
            let aim = (self.player.position - enemy.position).normalize_or_zero();
            self.bullets.push(EnemyBullet {
                position: enemy.position,
                velocity: aim * scenario.bullet_speed,
                active: true,
            });
        }
    }

    fn move_bullets(&mut self, delta: f64) {
        let bounds = &self.settings.engine.bounds;
        for bullet in self.bullets.iter_mut().filter(|b| b.active) {
            bullet.position += bullet.velocity * delta as f32;
            if !bounds.contains(bullet.position) {
                bullet.active = false;
            } else if bullet.position.distance(self.player.position)
                <= self.player.hitbox_radius + BULLET_HIT_RADIUS
            {
                bullet.active = false;
                let hit = resolve_true_damage(self.settings.scenario.bullet_damage);
                if self.player.receive_hit(&mut self.engine, hit.final_damage).is_some() {
                    self.damage_taken += hit.final_damage;
                }
            }
        }
        self.bullets.retain(|b| b.active);
    }

    fn player_acts(&mut self, now: f64) {
        let scenario = &self.settings.scenario;
        let Some((target, distance)) = nearest_enemy(self.player.position, &self.enemies) else {
            return;
        };

        if !self.player.ledger.skills_prevented() && distance <= scenario.ability_trigger_range {
            for slot in [SkillSlot::Primary, SkillSlot::Secondary] {
                if !self.engine.can_activate(slot, now) {
                    continue;
                }
                let enemy_pos = self.enemies[target].position;
                let aim = match self.engine.ability(slot).id() {
                    // Warp away from the threat
                    AbilityId::Warp => self.player.position * 2.0 - enemy_pos,
                    _ => enemy_pos,
                };
                let mut ctx =
                    SkillContext::new(&mut self.player, &mut self.enemies, &mut self.bullets);
                self.engine.activate(slot, now, aim, &mut ctx);
            }
        }

        let reach = scenario.player_range + self.engine.range_bonus();
        let in_reach = self.player.position.distance(self.enemies[target].position) <= reach;
        if !in_reach || now < self.player_next_attack || self.player.ledger.is_stunned() {
            return;
        }
        let stats = self.player.effective_stats();
        self.player_next_attack = now + attack_interval_ms(stats.attack_speed) as f64;
        let target = &mut self.enemies[target];
        let hit = resolve_basic_attack(&stats, &target.effective_stats(), &mut self.rng);
        self.damage_dealt += hit.final_damage;
        if hit.is_critical {
            self.crits += 1;
        }
        if target.take_damage(hit.final_damage) {
            debug!(now, "enemy defeated");
        }
    }

    fn report(self, frames: u64, steps: u64, elapsed_ms: f64) -> SessionReport {
        let tally = self.tally.0.borrow();
        let defeated = self.enemies.iter().filter(|e| !e.is_alive()).count();
        SessionReport {
            seed: self.rng.seed,
            frames,
            steps,
            elapsed_ms,
            player_hp: self.player.current_hp,
            player_survived: self.player.is_alive(),
            enemies_defeated: defeated,
            enemies_remaining: self.enemies.len() - defeated,
            player_damage_dealt: self.damage_dealt,
            player_crits: self.crits,
            damage_taken: self.damage_taken,
            hits_blocked: tally.blocks,
            counters: tally.counters,
            counter_hits: tally.counter_hits,
            enemies_stunned: tally.stunned,
            bullets_cleared: tally.bullets_cleared,
            abilities_used: tally.activations.clone(),
        }
    }
}

/// Run the configured encounter to completion.
///
/// Host frames of `frame_ms` feed the clock; the encounter itself advances in
/// fixed `step_ms` steps drained from the clock's accumulator.
pub fn run(settings: &SandboxSettings) -> anyhow::Result<SessionReport> {
    settings.engine.validate()?;
    settings.scenario.validate()?;
    let scenario = &settings.scenario;

    let mut clock = SimClock::new(ClockConfig {
        fixed_timestep_ms: scenario.step_ms,
        ..Default::default()
    });
    let mut session = Session::new(settings);

    info!(
        enemies = session.enemies.len(),
        primary = %session.engine.ability(SkillSlot::Primary).id(),
        secondary = %session.engine.ability(SkillSlot::Secondary).id(),
        "session start"
    );

    let mut now = 0.0;
    let mut steps = 0;
    'frames: while now < scenario.duration_ms && !session.is_over() {
        clock.advance(scenario.frame_ms);
        for _ in 0..clock.fixed_steps() {
            now += scenario.step_ms;
            steps += 1;
            session.step(now, scenario.step_ms);
            if session.is_over() || now >= scenario.duration_ms {
                break 'frames;
            }
        }
    }

    if !session.player.is_alive() {
        info!(now, "player defeated");
    } else if session.enemies.iter().all(|e| !e.is_alive()) {
        info!(now, "wave cleared");
    }

    Ok(session.report(clock.frame_count, steps, now))
}
