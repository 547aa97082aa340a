// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel simulation.
use log::debug;
use rand::prelude::*;
use std::{panic, thread};

use super::{Outcome, Simulation};

impl Simulation {
    /// Runs the simulation trials split across `num_tasks` parallel tasks.
    ///
    /// Each task gets a [SmallRng] seeded from `rng` before the tasks start,
    /// so that a seeded `rng` gives reproducible outcomes for the same number
    /// of tasks.
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_run<R: Rng>(&self, num_tasks: usize, rng: &mut R) -> Outcome {
        assert!(num_tasks > 0);

        debug!(
            "Simulating {} trials against {} opponents with {} tasks",
            self.trials, self.opponents, num_tasks
        );

        let trials_per_task = self.trials / num_tasks;
        let extra_trials = self.trials % num_tasks;

        let rngs = (0..num_tasks)
            .map(|_| SmallRng::from_rng(&mut *rng))
            .collect::<Vec<_>>();

        let outcome = thread::scope(|s| {
            let tasks = rngs
                .into_iter()
                .enumerate()
                .map(|(task_id, mut rng)| {
                    let trials = trials_per_task + usize::from(task_id < extra_trials);
                    s.spawn(move || self.run_trials(trials, &mut rng))
                })
                .collect::<Vec<_>>();

            tasks
                .into_iter()
                .map(|task| task.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .sum::<Outcome>()
        });

        debug!(
            "Simulation done wins={} ties={} losses={}",
            outcome.wins(),
            outcome.ties(),
            outcome.losses()
        );

        outcome
    }
}
