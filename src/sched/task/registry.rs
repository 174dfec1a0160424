//! Registro de Threads
//!
//! Dono da coleção ordenada de Thread Control Blocks. O tamanho é fixado
//! durante o setup: threads nunca são removidas durante uma rodada.

use super::entity::Thread;
use super::state::ThreadState;
use crate::sys::Tid;

/// Coleção ordenada de TCBs, indexada por `Tid`.
#[derive(Debug, Default)]
pub struct ThreadRegistry {
    threads: Vec<Thread>,
}

impl ThreadRegistry {
    pub fn new() -> Self {
        Self {
            threads: Vec::new(),
        }
    }

    /// Cria uma nova thread em estado Ready.
    ///
    /// O id é o tamanho atual do registro (monotônico, nunca reutilizado).
    ///
    /// # Panics
    /// Burst zero é erro de configuração, fatal.
    pub fn create(&mut self, burst_time: u32, priority: u8) -> Tid {
        assert!(burst_time > 0, "burst_time deve ser positivo");

        let tid = Tid::new(self.threads.len());
        self.threads.push(Thread::new(tid, burst_time, priority));
        crate::sinfo!("Thread {} created", tid);
        tid
    }

    /// Acesso imutável a um TCB. Tid fora do registro é bug de setup (panic).
    pub fn get(&self, tid: Tid) -> &Thread {
        &self.threads[tid.as_usize()]
    }

    /// Acesso mutável a um TCB. Tid fora do registro é bug de setup (panic).
    pub fn get_mut(&mut self, tid: Tid) -> &mut Thread {
        &mut self.threads[tid.as_usize()]
    }

    /// Número de threads registradas
    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Itera os ids em ordem de criação (a ordem de dispatch do round-robin)
    pub fn tids(&self) -> impl Iterator<Item = Tid> {
        (0..self.threads.len()).map(Tid::new)
    }

    /// Cópia somente-leitura de todos os TCBs, para observação externa
    pub fn snapshot(&self) -> Vec<Thread> {
        self.threads.clone()
    }

    /// Ponto fixo global: toda thread terminou
    pub fn all_terminated(&self) -> bool {
        self.threads
            .iter()
            .all(|t| t.state == ThreadState::Terminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::task::WaitChannel;

    #[test]
    fn ids_sequenciais_em_ordem_de_criacao() {
        let mut reg = ThreadRegistry::new();
        assert_eq!(reg.create(10, 1), Tid::new(0));
        assert_eq!(reg.create(8, 2), Tid::new(1));
        assert_eq!(reg.create(7, 3), Tid::new(2));
        assert_eq!(reg.len(), 3);

        let tids: Vec<Tid> = reg.tids().collect();
        assert_eq!(tids, vec![Tid::new(0), Tid::new(1), Tid::new(2)]);
    }

    #[test]
    fn thread_nasce_ready_com_cpu_zerada() {
        let mut reg = ThreadRegistry::new();
        let tid = reg.create(5, 1);

        let t = reg.get(tid);
        assert_eq!(t.state, ThreadState::Ready);
        assert_eq!(t.cpu_used, 0);
        assert_eq!(t.burst_time, 5);
        assert_eq!(t.waiting_on, WaitChannel::None);
    }

    #[test]
    #[should_panic(expected = "burst_time deve ser positivo")]
    fn burst_zero_e_erro_fatal_de_configuracao() {
        let mut reg = ThreadRegistry::new();
        reg.create(0, 1);
    }

    #[test]
    #[should_panic]
    fn tid_desconhecido_e_erro_fatal() {
        let reg = ThreadRegistry::new();
        let _ = reg.get(Tid::new(3));
    }

    #[test]
    fn ponto_fixo_global_exige_todas_terminadas() {
        let mut reg = ThreadRegistry::new();
        let a = reg.create(1, 1);
        let b = reg.create(1, 1);
        assert!(!reg.all_terminated());

        reg.get_mut(a).state = ThreadState::Terminated;
        assert!(!reg.all_terminated());

        reg.get_mut(b).state = ThreadState::Terminated;
        assert!(reg.all_terminated());
    }
}
