//! Contexto de Simulação
//!
//! Objeto explícito que possui todo o estado mutável compartilhado de uma
//! rodada: o registro de threads, o conjunto fixo de semáforos nomeados e o
//! monitor. Nada de singletons de processo — múltiplas simulações
//! independentes coexistem (essencial para os testes).

use crate::sched::config;
use crate::sched::task::{Thread, ThreadRegistry, WaitChannel};
use crate::sched::trigger::SyncAction;
use crate::sync::{Monitor, Semaphore};
use crate::sys::{SemId, Tid};

/// Estado completo de uma simulação
#[derive(Debug)]
pub struct SimContext {
    pub threads: ThreadRegistry,
    pub semaphores: Vec<Semaphore>,
    pub monitor: Monitor,
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SimContext {
    /// Contexto com o conjunto padrão de semáforos (S1..S3, valor 1)
    pub fn new() -> Self {
        let names: Vec<(String, i32)> = (1..=config::DEFAULT_SEM_COUNT)
            .map(|i| (format!("S{i}"), config::DEFAULT_SEM_VALUE))
            .collect();
        Self::with_semaphores(&names)
    }

    /// Contexto com semáforos nomeados arbitrários (nome, valor inicial)
    pub fn with_semaphores<S: AsRef<str>>(specs: &[(S, i32)]) -> Self {
        let semaphores = specs
            .iter()
            .enumerate()
            .map(|(i, (name, initial))| {
                Semaphore::new(
                    name.as_ref(),
                    WaitChannel::Semaphore(SemId::new(i)),
                    *initial,
                )
            })
            .collect();

        Self {
            threads: ThreadRegistry::new(),
            semaphores,
            monitor: Monitor::new(),
        }
    }

    /// Cria uma thread antes da primeira varredura (ids 0..N-1 em ordem)
    pub fn create_thread(&mut self, burst_time: u32, priority: u8) -> Tid {
        self.threads.create(burst_time, priority)
    }

    /// Acesso a um semáforo nomeado; id fora do conjunto é bug de setup
    pub fn semaphore(&self, id: SemId) -> &Semaphore {
        &self.semaphores[id.as_usize()]
    }

    /// Executa uma operação de sincronização em nome de `tid`.
    ///
    /// Efeitos colaterais (bloqueio, desbloqueio) são síncronos sobre o
    /// registro de threads.
    pub fn apply(&mut self, tid: Tid, action: SyncAction) {
        match action {
            SyncAction::SemWait(id) => {
                self.semaphores[id.as_usize()].wait(tid, &mut self.threads)
            }
            SyncAction::SemSignal(id) => {
                self.semaphores[id.as_usize()].signal(&mut self.threads)
            }
            SyncAction::MonitorEnter => self.monitor.enter(tid, &mut self.threads),
            SyncAction::MonitorExit => self.monitor.exit(tid, &mut self.threads),
            SyncAction::ConditionWait => self.monitor.condition_wait(tid, &mut self.threads),
            SyncAction::ConditionSignal => self.monitor.condition_signal(tid, &mut self.threads),
        }
    }

    /// Snapshot somente-leitura de todos os TCBs
    pub fn snapshot(&self) -> Vec<Thread> {
        self.threads.snapshot()
    }

    /// Rótulo de exibição do canal de espera (coluna WAITING ON da tabela)
    pub fn wait_label(&self, channel: WaitChannel) -> &str {
        match channel {
            WaitChannel::None => "-",
            WaitChannel::Semaphore(id) => self.semaphores[id.as_usize()].name(),
            WaitChannel::MonitorLock => self.monitor.lock().name(),
            WaitChannel::MonitorCondition => "MONITOR",
        }
    }
}
