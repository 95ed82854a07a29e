use shared_types::{AppKind, Position, WindowId, WindowState};

use crate::config::DesktopConfig;

/// Open windows and the stacking counter.
///
/// Every mutation goes through the methods below. Unknown ids are ignored, so
/// all operations are total.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    windows: Vec<WindowState>,
    top_z: u32,
    opened: u32,
    cascade_origin: i32,
    cascade_step: i32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(&DesktopConfig::default())
    }
}

impl WindowManager {
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            top_z: config.initial_z,
            opened: 0,
            cascade_origin: config.cascade_origin,
            cascade_step: config.cascade_step,
        }
    }

    /// When the counter is exhausted the windows are renumbered 1..=n in
    /// their current order, so stacking stays strictly increasing.
    fn next_z(&mut self) -> u32 {
        if self.top_z == u32::MAX {
            self.restack();
        }
        self.top_z += 1;
        self.top_z
    }

    fn restack(&mut self) {
        let mut order: Vec<usize> = (0..self.windows.len()).collect();
        order.sort_by_key(|&i| self.windows[i].z_index);
        for (rank, i) in order.into_iter().enumerate() {
            self.windows[i].z_index = rank as u32 + 1;
        }
        self.top_z = self.windows.len() as u32;
    }

    fn window_mut(&mut self, id: &WindowId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    pub fn open(&mut self, kind: AppKind) -> WindowId {
        let opened = i32::try_from(self.opened).unwrap_or(i32::MAX);
        let offset = self
            .cascade_origin
            .saturating_add(opened.saturating_mul(self.cascade_step));
        self.opened = self.opened.saturating_add(1);

        let window = WindowState {
            id: WindowId::new(kind),
            kind,
            title: kind.title().to_string(),
            minimized: false,
            maximized: false,
            z_index: self.next_z(),
            position: Position::new(offset, offset),
            size: kind.default_size(),
        };
        let id = window.id.clone();
        self.windows.push(window);
        id
    }

    pub fn close(&mut self, id: &WindowId) {
        self.windows.retain(|w| &w.id != id);
    }

    pub fn focus(&mut self, id: &WindowId) {
        if self.get(id).is_none() {
            return;
        }
        let z = self.next_z();
        if let Some(window) = self.window_mut(id) {
            window.z_index = z;
        }
    }

    pub fn toggle_minimize(&mut self, id: &WindowId) {
        if let Some(window) = self.window_mut(id) {
            window.minimized = !window.minimized;
        }
    }

    pub fn toggle_maximize(&mut self, id: &WindowId) {
        if let Some(window) = self.window_mut(id) {
            window.maximized = !window.maximized;
        }
    }

    /// Ignored while the window is maximized.
    pub fn reposition(&mut self, id: &WindowId, x: i32, y: i32) {
        if let Some(window) = self.window_mut(id) {
            if !window.maximized {
                window.position = Position::new(x, y);
            }
        }
    }

    /// First-load About window. Does nothing once any window exists.
    pub fn open_welcome_if_empty(&mut self) -> Option<WindowId> {
        if self.is_empty() {
            Some(self.open(AppKind::About))
        } else {
            None
        }
    }

    /// Start menu selection: the menu closes and the window opens in front.
    pub fn launch(&mut self, kind: AppKind, menu: &mut StartMenuState) -> WindowId {
        menu.dismiss();
        self.open(kind)
    }

    /// Taskbar click: restore a minimized window, minimize the front one,
    /// raise any other.
    pub fn activate_from_taskbar(&mut self, id: &WindowId) {
        let Some(window) = self.get(id) else {
            return;
        };

        if window.minimized {
            self.toggle_minimize(id);
            self.focus(id);
        } else if self.is_front(id) {
            self.toggle_minimize(id);
        } else {
            self.focus(id);
        }
    }

    /// Open windows in the order they were opened.
    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn front_window(&self) -> Option<&WindowState> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
    }

    /// Paint layer for a window: its 1-based rank in the stacking order.
    /// Bounded by the window count, unlike the raw counter.
    pub fn stack_layer(&self, id: &WindowId) -> Option<u32> {
        let z = self.get(id)?.z_index;
        let below = self.windows.iter().filter(|w| w.z_index < z).count();
        Some(below as u32 + 1)
    }

    pub fn is_front(&self, id: &WindowId) -> bool {
        self.front_window().is_some_and(|w| &w.id == id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Visibility of the start menu popover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartMenuState {
    open: bool,
}

impl StartMenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStorage};
    use std::collections::HashSet;

    fn z_of(manager: &WindowManager, id: &WindowId) -> u32 {
        manager.get(id).map(|w| w.z_index).unwrap()
    }

    #[test]
    fn open_assigns_unique_ids_and_increasing_z() {
        let mut manager = WindowManager::default();
        let ids: Vec<WindowId> = [
            AppKind::Notepad,
            AppKind::Notepad,
            AppKind::Terminal,
            AppKind::Files,
            AppKind::About,
        ]
        .into_iter()
        .map(|kind| manager.open(kind))
        .collect();

        let unique: HashSet<&WindowId> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let zs: Vec<u32> = ids.iter().map(|id| z_of(&manager, id)).collect();
        assert!(zs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn open_uses_kind_defaults() {
        let mut manager = WindowManager::default();
        let id = manager.open(AppKind::About);
        let window = manager.get(&id).unwrap();

        assert_eq!(window.kind, AppKind::About);
        assert_eq!(window.title, "About Web Windows");
        assert_eq!(window.size, AppKind::About.default_size());
        assert!(!window.minimized);
        assert!(!window.maximized);
        assert_eq!(window.position, Position::new(60, 60));
        assert!(manager.is_front(&id));
    }

    #[test]
    fn editor_then_shell_cascades_and_stacks() {
        let mut manager = WindowManager::default();
        let editor = manager.open(AppKind::Notepad);
        let shell = manager.open(AppKind::Terminal);

        assert_eq!(manager.len(), 2);
        assert!(z_of(&manager, &shell) > z_of(&manager, &editor));

        let editor_pos = manager.get(&editor).unwrap().position;
        let shell_pos = manager.get(&shell).unwrap().position;
        assert_ne!(editor_pos, shell_pos);
        assert!(shell_pos.x > editor_pos.x && shell_pos.y > editor_pos.y);
    }

    #[test]
    fn cascade_keeps_moving_after_close() {
        let mut manager = WindowManager::default();
        let first = manager.open(AppKind::Notepad);
        let second = manager.open(AppKind::Notepad);
        let second_pos = manager.get(&second).unwrap().position;
        manager.close(&first);

        let third = manager.open(AppKind::Notepad);
        let third_pos = manager.get(&third).unwrap().position;
        assert!(third_pos.x > second_pos.x && third_pos.y > second_pos.y);
    }

    #[test]
    fn focus_raises_only_the_target() {
        let mut manager = WindowManager::default();
        let a = manager.open(AppKind::Notepad);
        let b = manager.open(AppKind::Terminal);
        let c = manager.open(AppKind::Files);
        manager.reposition(&b, 300, 200);
        manager.toggle_maximize(&c);

        let before_b = manager.get(&b).cloned().unwrap();
        let before_c = manager.get(&c).cloned().unwrap();

        manager.focus(&a);

        let a_z = z_of(&manager, &a);
        assert!(manager
            .windows()
            .iter()
            .filter(|w| w.id != a)
            .all(|w| w.z_index < a_z));
        assert_eq!(manager.get(&b), Some(&before_b));
        assert_eq!(manager.get(&c), Some(&before_c));

        let a_window = manager.get(&a).unwrap();
        assert_eq!(a_window.position, Position::new(60, 60));
        assert!(!a_window.minimized && !a_window.maximized);
    }

    #[test]
    fn repeated_focus_keeps_unique_front() {
        let mut manager = WindowManager::default();
        let editor = manager.open(AppKind::Notepad);
        let z_open = z_of(&manager, &editor);

        manager.focus(&editor);
        manager.focus(&editor);

        assert!(manager.is_front(&editor));
        assert!(z_of(&manager, &editor) > z_open);
    }

    #[test]
    fn close_removes_exactly_one_and_is_idempotent() {
        let mut manager = WindowManager::default();
        let a = manager.open(AppKind::Notepad);
        let b = manager.open(AppKind::Terminal);
        let c = manager.open(AppKind::Files);
        let before_a = manager.get(&a).cloned().unwrap();
        let before_c = manager.get(&c).cloned().unwrap();

        manager.close(&b);
        let after_first = manager.clone();
        manager.close(&b);

        assert_eq!(manager, after_first);
        assert_eq!(manager.len(), 2);
        assert!(manager.get(&b).is_none());
        assert_eq!(manager.get(&a), Some(&before_a));
        assert_eq!(manager.get(&c), Some(&before_c));
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut manager = WindowManager::default();
        manager.open(AppKind::Notepad);
        let snapshot = manager.clone();
        let ghost = WindowId("ghost".to_string());

        manager.close(&ghost);
        manager.focus(&ghost);
        manager.toggle_minimize(&ghost);
        manager.toggle_maximize(&ghost);
        manager.reposition(&ghost, 1, 1);
        manager.activate_from_taskbar(&ghost);

        assert_eq!(manager, snapshot);
    }

    #[test]
    fn maximize_round_trip_preserves_geometry() {
        let mut manager = WindowManager::default();
        let id = manager.open(AppKind::Files);
        manager.reposition(&id, 150, 90);
        let before = manager.get(&id).cloned().unwrap();

        manager.toggle_maximize(&id);
        assert!(manager.get(&id).unwrap().maximized);
        manager.toggle_maximize(&id);

        let after = manager.get(&id).unwrap();
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert!(!after.maximized);
    }

    #[test]
    fn reposition_is_ignored_while_maximized() {
        let mut manager = WindowManager::default();
        let id = manager.open(AppKind::Notepad);
        manager.toggle_maximize(&id);
        manager.reposition(&id, 500, 500);
        manager.toggle_maximize(&id);

        assert_eq!(manager.get(&id).unwrap().position, Position::new(60, 60));

        manager.reposition(&id, 500, 400);
        assert_eq!(manager.get(&id).unwrap().position, Position::new(500, 400));
    }

    #[test]
    fn minimize_is_its_own_inverse() {
        let mut manager = WindowManager::default();
        let id = manager.open(AppKind::Terminal);

        manager.toggle_minimize(&id);
        assert!(manager.get(&id).unwrap().minimized);
        manager.toggle_minimize(&id);
        assert!(!manager.get(&id).unwrap().minimized);
    }

    #[test]
    fn front_window_skips_minimized() {
        let mut manager = WindowManager::default();
        assert!(manager.front_window().is_none());

        let a = manager.open(AppKind::Notepad);
        let b = manager.open(AppKind::Terminal);
        assert!(manager.is_front(&b));

        manager.toggle_minimize(&b);
        assert!(manager.is_front(&a));

        manager.toggle_minimize(&a);
        assert!(manager.front_window().is_none());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn maximized_and_minimized_can_coexist() {
        let mut manager = WindowManager::default();
        let id = manager.open(AppKind::Notepad);
        manager.toggle_maximize(&id);
        manager.toggle_minimize(&id);

        let window = manager.get(&id).unwrap();
        assert!(window.maximized && window.minimized);
        assert!(manager.front_window().is_none());
    }

    #[test]
    fn taskbar_activation_cycles() {
        let mut manager = WindowManager::default();
        let a = manager.open(AppKind::Notepad);
        let b = manager.open(AppKind::Terminal);

        // Background window comes to front.
        manager.activate_from_taskbar(&a);
        assert!(manager.is_front(&a));

        // Front window minimizes.
        manager.activate_from_taskbar(&a);
        assert!(manager.get(&a).unwrap().minimized);
        assert!(manager.is_front(&b));

        // Minimized window restores to front.
        manager.activate_from_taskbar(&a);
        assert!(!manager.get(&a).unwrap().minimized);
        assert!(manager.is_front(&a));
    }

    #[test]
    fn config_drives_cascade_and_counter() {
        let config = DesktopConfig {
            cascade_origin: 10,
            cascade_step: 5,
            initial_z: 100,
            ..DesktopConfig::default()
        };
        let mut manager = WindowManager::new(&config);
        let a = manager.open(AppKind::Notepad);
        let b = manager.open(AppKind::Notepad);

        assert_eq!(manager.get(&a).unwrap().position, Position::new(10, 10));
        assert_eq!(manager.get(&b).unwrap().position, Position::new(15, 15));
        assert_eq!(z_of(&manager, &a), 101);
        assert_eq!(z_of(&manager, &b), 102);
    }

    #[test]
    fn exhausted_counter_restacks_in_order() {
        let config = DesktopConfig {
            initial_z: u32::MAX - 1,
            ..DesktopConfig::default()
        };
        let mut manager = WindowManager::new(&config);
        let a = manager.open(AppKind::Notepad);
        assert_eq!(z_of(&manager, &a), u32::MAX);

        let b = manager.open(AppKind::Terminal);
        let c = manager.open(AppKind::Files);
        assert!(z_of(&manager, &a) < z_of(&manager, &b));
        assert!(z_of(&manager, &b) < z_of(&manager, &c));

        manager.focus(&a);
        assert!(manager.is_front(&a));
        assert_eq!(z_of(&manager, &a), 4);
    }

    #[test]
    fn max_initial_z_from_storage_opens_in_front() {
        let store = MemoryStorage::new();
        store
            .set("webwindows.config", &format!(r#"{{"initial_z": {}}}"#, u32::MAX))
            .unwrap();
        let mut manager = WindowManager::new(&DesktopConfig::load(&store));

        let a = manager.open(AppKind::About);
        let b = manager.open(AppKind::Notepad);
        assert!(manager.is_front(&b));
        assert!(z_of(&manager, &a) < z_of(&manager, &b));
    }

    #[test]
    fn extreme_cascade_config_saturates() {
        let config = DesktopConfig {
            cascade_origin: i32::MAX - 10,
            cascade_step: i32::MAX,
            ..DesktopConfig::default()
        };
        let mut manager = WindowManager::new(&config);
        let a = manager.open(AppKind::Notepad);
        let b = manager.open(AppKind::Notepad);

        assert_eq!(manager.get(&a).unwrap().position.x, i32::MAX - 10);
        assert_eq!(manager.get(&b).unwrap().position.x, i32::MAX);
    }

    #[test]
    fn stack_layers_stay_below_the_taskbar() {
        let config = DesktopConfig {
            initial_z: 100_000,
            ..DesktopConfig::default()
        };
        let mut manager = WindowManager::new(&config);
        let a = manager.open(AppKind::Notepad);
        let b = manager.open(AppKind::Terminal);
        let c = manager.open(AppKind::Files);
        manager.focus(&a);

        assert_eq!(manager.stack_layer(&b), Some(1));
        assert_eq!(manager.stack_layer(&c), Some(2));
        assert_eq!(manager.stack_layer(&a), Some(3));
        assert!(manager
            .windows()
            .iter()
            .all(|w| manager.stack_layer(&w.id).unwrap() <= manager.len() as u32));
        assert_eq!(manager.stack_layer(&WindowId("ghost".to_string())), None);
    }

    #[test]
    fn focus_on_front_window_still_advances() {
        let mut manager = WindowManager::default();
        let a = manager.open(AppKind::Notepad);
        let before = z_of(&manager, &a);

        manager.focus(&a);
        assert_eq!(z_of(&manager, &a), before + 1);
    }

    #[test]
    fn welcome_window_opens_only_when_empty() {
        let mut manager = WindowManager::default();
        let about = manager.open_welcome_if_empty().unwrap();
        assert_eq!(manager.get(&about).unwrap().kind, AppKind::About);

        assert_eq!(manager.open_welcome_if_empty(), None);
        assert_eq!(manager.len(), 1);

        manager.close(&about);
        let editor = manager.open(AppKind::Notepad);
        assert_eq!(manager.open_welcome_if_empty(), None);
        assert!(manager.is_front(&editor));
    }

    #[test]
    fn launching_hides_the_start_menu() {
        let mut manager = WindowManager::default();
        let mut menu = StartMenuState::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        let id = manager.launch(AppKind::Terminal, &mut menu);
        assert!(!menu.is_open());
        assert!(manager.is_front(&id));

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
