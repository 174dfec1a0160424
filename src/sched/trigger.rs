//! Políticas de disparo de sincronização
//!
//! Uma política decide, após cada tick, se a thread corrente invoca alguma
//! operação de primitiva. Duas variantes atrás da mesma interface:
//! - [`ScriptedPolicy`]: tabela inspecionável de regras (tid, cpu) → ação,
//!   usada para demonstrar deterministicamente a semântica do monitor.
//! - [`RandomPolicy`]: sorteio uniforme por tick, reprodutível por seed.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::sched::config;
use crate::sys::{SemId, Tid};

/// Operação de sincronização a executar num tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// wait() no semáforo nomeado
    SemWait(SemId),
    /// signal() no semáforo nomeado
    SemSignal(SemId),
    /// enter() no monitor
    MonitorEnter,
    /// exit() no monitor
    MonitorExit,
    /// espera na variável de condição do monitor
    ConditionWait,
    /// sinaliza a variável de condição do monitor
    ConditionSignal,
}

/// Decide qual operação de sincronização (se alguma) dispara num tick.
///
/// Consultada pelo escalonador após o incremento de CPU e a checagem de
/// término — uma thread que termina no tick não dispara gatilho.
pub trait TriggerPolicy {
    fn on_tick(&mut self, tid: Tid, cpu_used: u32) -> Option<SyncAction>;
}

/// Regra de script: quando `tid` atinge `at_cpu` ticks usados, dispara `action`
#[derive(Debug, Clone, Copy)]
pub struct TriggerRule {
    pub tid: Tid,
    pub at_cpu: u32,
    pub action: SyncAction,
}

/// Política com script fixo, varrido em ordem de declaração
#[derive(Debug, Default)]
pub struct ScriptedPolicy {
    rules: Vec<TriggerRule>,
}

impl ScriptedPolicy {
    pub fn new(rules: Vec<TriggerRule>) -> Self {
        Self { rules }
    }

    /// Tabela de regras, para inspeção
    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    /// Script da demonstração de monitor:
    /// - Thread 0 entra no monitor com 2 ticks usados e espera na condição
    ///   com 3 (libera o token e bloqueia); ao acordar, re-entra com 4.
    /// - Thread 1 entra com 2, sinaliza a condição com 3 e sai com 4.
    pub fn monitor_demo() -> Self {
        let t0 = Tid::new(0);
        let t1 = Tid::new(1);
        Self::new(vec![
            TriggerRule {
                tid: t0,
                at_cpu: 2,
                action: SyncAction::MonitorEnter,
            },
            TriggerRule {
                tid: t0,
                at_cpu: 3,
                action: SyncAction::ConditionWait,
            },
            TriggerRule {
                tid: t0,
                at_cpu: 4,
                action: SyncAction::MonitorEnter,
            },
            TriggerRule {
                tid: t1,
                at_cpu: 2,
                action: SyncAction::MonitorEnter,
            },
            TriggerRule {
                tid: t1,
                at_cpu: 3,
                action: SyncAction::ConditionSignal,
            },
            TriggerRule {
                tid: t1,
                at_cpu: 4,
                action: SyncAction::MonitorExit,
            },
        ])
    }
}

impl TriggerPolicy for ScriptedPolicy {
    fn on_tick(&mut self, tid: Tid, cpu_used: u32) -> Option<SyncAction> {
        self.rules
            .iter()
            .find(|r| r.tid == tid && r.at_cpu == cpu_used)
            .map(|r| r.action)
    }
}

/// Política aleatória: por tick, sorteio uniforme em [0, 100)
/// — [0, 10) wait, [10, 20) signal, resto nada.
///
/// PRNG determinístico por seed, para rodadas reprodutíveis.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: Pcg64Mcg,
    sem_count: usize,
}

impl RandomPolicy {
    pub fn new(seed: u64, sem_count: usize) -> Self {
        assert!(sem_count > 0, "cenario aleatorio exige ao menos um semaforo");
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
            sem_count,
        }
    }

    fn pick_sem(&mut self) -> SemId {
        SemId::new(self.rng.gen_range(0..self.sem_count))
    }
}

impl TriggerPolicy for RandomPolicy {
    fn on_tick(&mut self, _tid: Tid, _cpu_used: u32) -> Option<SyncAction> {
        let draw = self.rng.gen_range(0..config::TRIGGER_DRAW_RANGE);
        if draw < config::TRIGGER_WAIT_BELOW {
            Some(SyncAction::SemWait(self.pick_sem()))
        } else if draw < config::TRIGGER_SIGNAL_BELOW {
            Some(SyncAction::SemSignal(self.pick_sem()))
        } else {
            None
        }
    }
}
