//! two-group — smallest runnable simfab scenario.
//!
//! A time model in tick group 0 publishes the simulation time each tick; a
//! reporter model in tick group 1 consumes it in the same tick (group 1
//! runs after group 0's barrier, so the current epoch already holds the
//! time).  Swap the constants for a larger population and a deeper group
//! graph to stress the pool.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use simfab_core::{ModelInstanceId, ModelTypeId, SimClock, TickIndex};
use simfab_engine::{build_pool, ModelFactory, Scenario, ScenarioResult};
use simfab_exchange::Exchange;
use simfab_model::{InitDataSource, Model, ModelResult, ModelWrapper, TickGroupMap};

// ── Constants ─────────────────────────────────────────────────────────────────

const TICKS:         u64 = 10;
const SECS_PER_TICK: f64 = 0.5;
const NUM_THREADS:   Option<usize> = None; // all logical cores

const TIME_MODEL_ID:    ModelInstanceId = ModelInstanceId(1);
const REPORTER_MODEL_ID: ModelInstanceId = ModelInstanceId(2);

// ── Payload ───────────────────────────────────────────────────────────────────

/// Simulation time as published by the time model each tick.
#[derive(Copy, Clone, Debug)]
struct TickTime {
    tick:     TickIndex,
    time_sec: f64,
}

// ── Time model (group 0) ──────────────────────────────────────────────────────

struct TimeModel {
    instance_id: ModelInstanceId,
    clock:       SimClock,
    exchange:    Arc<Exchange>,
}

impl Model for TimeModel {
    type Init = ModelInstanceId;

    fn model_type_id() -> ModelTypeId {
        ModelTypeId(1)
    }

    fn model_instance_id(&self) -> ModelInstanceId {
        self.instance_id
    }

    fn init(&mut self, data: ModelInstanceId) -> ModelResult<()> {
        self.instance_id = data;
        Ok(())
    }

    fn tick(&mut self, tick: TickIndex) -> ModelResult<()> {
        if let Some(store) = self.exchange.store::<TickTime>() {
            store.add(
                self.instance_id,
                vec![TickTime { tick, time_sec: self.clock.elapsed_secs(tick) }],
            );
        }
        Ok(())
    }
}

// ── Reporter model (group 1) ──────────────────────────────────────────────────

/// Consumes the time model's current-epoch output and keeps a transcript.
struct Reporter {
    instance_id: ModelInstanceId,
    producer:    ModelInstanceId,
    exchange:    Arc<Exchange>,
    transcript:  Arc<Mutex<Vec<TickTime>>>,
}

impl Model for Reporter {
    type Init = ModelInstanceId;

    fn model_type_id() -> ModelTypeId {
        ModelTypeId(2)
    }

    fn model_instance_id(&self) -> ModelInstanceId {
        self.instance_id
    }

    fn init(&mut self, data: ModelInstanceId) -> ModelResult<()> {
        self.instance_id = data;
        self.transcript.lock().unwrap().clear();
        Ok(())
    }

    fn tick(&mut self, _tick: TickIndex) -> ModelResult<()> {
        if let Some(store) = self.exchange.store::<TickTime>() {
            let seen = store.current_from(self.producer);
            self.transcript.lock().unwrap().extend(seen);
        }
        Ok(())
    }
}

// ── Init source ───────────────────────────────────────────────────────────────

struct FixedId(ModelInstanceId);

impl InitDataSource for FixedId {
    type Data = ModelInstanceId;

    fn get(&mut self) -> ModelInstanceId {
        self.0
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

struct TwoGroupFactory {
    transcript: Arc<Mutex<Vec<TickTime>>>,
}

impl ModelFactory for TwoGroupFactory {
    fn populate(&mut self, groups: &mut TickGroupMap) -> ScenarioResult<Arc<Exchange>> {
        let mut exchange = Exchange::new();
        exchange.register::<TickTime>();
        let exchange = Arc::new(exchange);

        groups.entry(0).or_default().push(ModelWrapper::new(
            TimeModel {
                instance_id: ModelInstanceId::UNDEFINED,
                clock:       SimClock::new(SECS_PER_TICK),
                exchange:    Arc::clone(&exchange),
            },
            FixedId(TIME_MODEL_ID),
        ));
        groups.entry(1).or_default().push(ModelWrapper::new(
            Reporter {
                instance_id: ModelInstanceId::UNDEFINED,
                producer:    TIME_MODEL_ID,
                exchange:    Arc::clone(&exchange),
                transcript:  Arc::clone(&self.transcript),
            },
            FixedId(REPORTER_MODEL_ID),
        ));

        Ok(exchange)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== two-group — simfab scenario demo ===");
    println!("Ticks: {TICKS}  |  Rate: {SECS_PER_TICK} s/tick");
    println!();

    // 1. Worker pool shared by the scenario and the exchange operations.
    let pool = build_pool(NUM_THREADS)?;

    // 2. Populate and initialise.
    let transcript = Arc::new(Mutex::new(Vec::new()));
    let mut factory = TwoGroupFactory { transcript: Arc::clone(&transcript) };
    let scenario = Scenario::new(pool);
    scenario.populate_from(&mut factory)?;
    println!(
        "Populated: {} entities in {} tick groups",
        scenario.entities_size(),
        scenario.tick_groups_size()
    );

    scenario.init()?;

    // 3. Run.
    for _ in 0..TICKS {
        scenario.tick()?;
    }
    println!("Ran to {}", scenario.next_tick_index());
    println!();

    // 4. What the reporter saw, tick by tick.
    println!("{:<8} {:<10}", "Tick", "Time (s)");
    println!("{}", "-".repeat(20));
    for entry in transcript.lock().unwrap().iter() {
        println!("{:<8} {:<10}", entry.tick.to_string(), entry.time_sec);
    }

    Ok(())
}
