//! Thread Control Block

use super::state::ThreadState;
use crate::sys::{SemId, Tid};

/// Em qual primitiva uma thread bloqueada está esperando.
///
/// Substitui o campo textual "waiting on" do modelo clássico por uma
/// variante etiquetada com handle estável, eliminando comparações de string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitChannel {
    /// Não está esperando nada
    None,
    /// Na fila de espera de um semáforo nomeado
    Semaphore(SemId),
    /// Na fila de entrada do monitor (semáforo de exclusão mútua interno)
    MonitorLock,
    /// Na fila de condição do monitor
    MonitorCondition,
}

/// Thread Control Block
#[derive(Debug, Clone)]
pub struct Thread {
    /// ID único (ordem de criação)
    pub tid: Tid,
    /// Total de ticks necessários para completar (imutável)
    pub burst_time: u32,
    /// Ticks já consumidos (monotônico, <= burst_time)
    pub cpu_used: u32,
    /// Prioridade (armazenada, não usada na decisão de dispatch)
    pub priority: u8,
    /// Estado atual
    pub state: ThreadState,
    /// Primitiva que a bloqueia, se houver
    pub waiting_on: WaitChannel,
}

impl Thread {
    /// Cria uma nova thread em estado Ready com CPU zerada
    pub fn new(tid: Tid, burst_time: u32, priority: u8) -> Self {
        Self {
            tid,
            burst_time,
            cpu_used: 0,
            priority,
            state: ThreadState::Ready,
            waiting_on: WaitChannel::None,
        }
    }

    /// Marca como pronta e limpa o canal de espera
    pub fn set_ready(&mut self) {
        self.state = ThreadState::Ready;
        self.waiting_on = WaitChannel::None;
    }

    /// Marca como bloqueada no canal dado
    pub fn set_blocked(&mut self, channel: WaitChannel) {
        self.state = ThreadState::Blocked;
        self.waiting_on = channel;
    }

    /// Verifica se consumiu todo o burst
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, ThreadState::Terminated)
    }
}
