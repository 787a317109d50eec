use glam::Vec3;

/// Observable moments produced by a tick, drained by the embedding
/// layer for rendering or audio. The core never renders anything
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    BlockPlaced,
    BlockMined,
    MiningSpark,
    Delivered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimEvent {
    pub kind: EventKind,
    pub position: Vec3,
    pub color: [f32; 3],
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EventKind, position: Vec3, color: [f32; 3]) {
        self.events.push(SimEvent { kind, position, color });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand the accumulated events to the caller and reset the queue.
    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
