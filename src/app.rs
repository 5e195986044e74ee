//! Interactive host application driving the progress circle widget.
//!
//! The app owns the host services, the widget registry and the event loop.
//! Widgets are driven exclusively through the `WidgetPlugin` capability
//! interface; everything the widget learns about the world flows through a
//! `HostContext` assembled from the host parts.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::Frame;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
	MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use progress_circle_host_api::{Guid, HostContext, Placement, WidgetRegistry};
use progress_circle_tui::RingGaugeFactory;
use progress_circle_widget::{ProgressCircleContainer, ProgressCircleProps};

use progress_circle::host::{ActionEffect, HostBus, ObjectStore, SimulatedActions, ViewStack};

use crate::feed::Feed;
use crate::settings::{DemoOptions, ResolvedConfig};

/// Actions registered with the simulated runner.
const ACTION_RESET: &str = "ACT_Reset";
const ACTION_COMPLETE: &str = "ACT_Complete";

/// Demo host application state.
pub struct App {
	registry: WidgetRegistry,
	store: ObjectStore,
	bus: HostBus,
	actions: SimulatedActions,
	views: ViewStack,
	feed: Feed,
	demo: DemoOptions,
	progress_attribute: String,
	objects: Vec<Guid>,
	bound: usize,
	throbber_state: ThrobberState,
	widget_area: Option<Rect>,
}

impl App {
	/// Assemble the host, register the widget and bind the first object.
	pub fn new(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			props, demo, ..
		} = config;
		let progress_attribute = props.progress_attribute.clone();
		let maximum_attribute = props.maximum_value_attribute.clone();

		let mut store = ObjectStore::new();
		let mut objects = Vec::new();
		for initial in [demo.initial_value, demo.capacity * 0.65] {
			let guid = store.create(&demo.entity, &[]);
			store.set_numeric(guid, &progress_attribute, initial);
			if let Some(attribute) = &maximum_attribute {
				store.set_numeric(guid, attribute, demo.capacity);
			}
			objects.push(guid);
		}
		// Seeding writes are part of setup, not change traffic.
		store.drain_events();

		let mut actions = SimulatedActions::new();
		actions.register(
			ACTION_RESET,
			ActionEffect::SetAttribute {
				attribute: progress_attribute.clone(),
				value: demo.initial_value.to_string(),
			},
		);
		actions.register(
			ACTION_COMPLETE,
			ActionEffect::SetAttribute {
				attribute: progress_attribute.clone(),
				value: demo.capacity.to_string(),
			},
		);

		let views = ViewStack::new(demo.views.clone());
		let feed = Feed::new(demo.interval_ms);

		let mut app = Self {
			registry: WidgetRegistry::new(),
			store,
			bus: HostBus::new(),
			actions,
			views,
			feed,
			demo,
			progress_attribute,
			objects,
			bound: 0,
			throbber_state: ThrobberState::default(),
			widget_area: None,
		};
		app.register_widget(props)?;
		app.mount_widgets()?;
		app.bind_current_object();
		Ok(app)
	}

	fn register_widget(&mut self, props: ProgressCircleProps) -> Result<()> {
		let container = ProgressCircleContainer::new(props, Box::new(RingGaugeFactory));
		self.registry
			.register(container)
			.map_err(|err| anyhow!("failed to register widget: {err}"))?;
		Ok(())
	}

	fn mount_widgets(&mut self) -> Result<()> {
		for entry in self.registry.iter_mut() {
			entry
				.widget_mut()
				.mount(HostContext {
					data: &self.store,
					subscriptions: &mut self.bus,
					actions: &mut self.actions,
					navigation: &mut self.views,
				})
				.map_err(|err| anyhow!("failed to mount widget: {err}"))?;
		}
		Ok(())
	}

	fn unmount_widgets(&mut self) {
		for entry in self.registry.iter_mut() {
			entry.widget_mut().unmount(HostContext {
				data: &self.store,
				subscriptions: &mut self.bus,
				actions: &mut self.actions,
				navigation: &mut self.views,
			});
		}
	}

	fn bind_current_object(&mut self) {
		let guid = self.objects.get(self.bound).copied();
		for entry in self.registry.iter_mut() {
			entry.widget_mut().update(
				HostContext {
					data: &self.store,
					subscriptions: &mut self.bus,
					actions: &mut self.actions,
					navigation: &mut self.views,
				},
				guid,
			);
		}
	}

	fn click_widgets(&mut self) {
		for entry in self.registry.iter_mut() {
			entry.widget_mut().click(HostContext {
				data: &self.store,
				subscriptions: &mut self.bus,
				actions: &mut self.actions,
				navigation: &mut self.views,
			});
		}
	}

	fn bound_guid(&self) -> Option<Guid> {
		self.objects.get(self.bound).copied()
	}

	fn bound_value(&self) -> Option<f64> {
		self.bound_guid()
			.and_then(|guid| self.store.numeric(guid, &self.progress_attribute))
	}

	fn adjust_value(&mut self, delta: f64) {
		let Some(guid) = self.bound_guid() else {
			return;
		};
		let value = self.bound_value().unwrap_or(0.0) + delta;
		self.store
			.set_numeric(guid, &self.progress_attribute, value);
		if value < self.demo.capacity {
			self.feed.reset();
		}
	}

	/// Run the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut quit = false;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key) {
							quit = true;
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}
			if quit {
				break Ok(());
			}

			self.pump_feed(Instant::now());
			self.apply_action_effects();
			self.route_change_events();
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		};

		self.unmount_widgets();

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	fn handle_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char('q') => return true,
			KeyCode::Esc => {
				if !self.views.close() {
					return true;
				}
			}
			KeyCode::Enter | KeyCode::Char(' ') => self.click_widgets(),
			KeyCode::Up => self.adjust_value(self.demo.step),
			KeyCode::Down => self.adjust_value(-self.demo.step),
			KeyCode::Char('p') => self.feed.toggle_paused(),
			KeyCode::Char('r') => {
				if let Some(guid) = self.bound_guid() {
					self.store.set_numeric(
						guid,
						&self.progress_attribute,
						self.demo.initial_value,
					);
					self.feed.reset();
				}
			}
			KeyCode::Tab => {
				if !self.objects.is_empty() {
					self.bound = (self.bound + 1) % self.objects.len();
					self.bind_current_object();
				}
			}
			_ => {}
		}
		false
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		if let Some(area) = self.widget_area
			&& area.contains((mouse.column, mouse.row).into())
		{
			self.click_widgets();
		}
	}

	fn pump_feed(&mut self, now: Instant) {
		if !self.feed.due(now) {
			return;
		}
		let Some(guid) = self.bound_guid() else {
			return;
		};
		let value = self.bound_value().unwrap_or(self.demo.initial_value);
		let next = value + self.demo.step;
		if next >= self.demo.capacity {
			self.store
				.set_numeric(guid, &self.progress_attribute, self.demo.capacity);
			self.feed.mark_complete();
		} else {
			self.store.set_numeric(guid, &self.progress_attribute, next);
		}
	}

	fn apply_action_effects(&mut self) {
		let effects = self.actions.drain_effects();
		if effects.is_empty() {
			return;
		}
		for (effect, guids) in effects {
			match effect {
				ActionEffect::SetAttribute { attribute, value } => {
					for guid in guids {
						self.store.set_attribute(guid, &attribute, value.clone());
					}
				}
			}
		}
		// Action writes may have completed or restarted the bound value.
		if let Some(value) = self.bound_value() {
			if value >= self.demo.capacity {
				self.feed.mark_complete();
			} else {
				self.feed.reset();
			}
		}
	}

	fn route_change_events(&mut self) {
		for event in self.store.drain_events() {
			if !self.bus.has_subscribers(&event) {
				continue;
			}
			for entry in self.registry.iter_mut() {
				entry.widget_mut().notify(
					HostContext {
						data: &self.store,
						subscriptions: &mut self.bus,
						actions: &mut self.actions,
						navigation: &mut self.views,
					},
					&event,
				);
			}
		}
	}

	fn draw(&mut self, frame: &mut Frame<'_>) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(5),
				Constraint::Length(1),
			])
			.split(frame.area());

		self.draw_status(frame, layout[0]);

		let content = layout[1];
		match self.views.current().map(|view| view.options.placement) {
			Some(Placement::Content) => {
				self.widget_area = None;
				self.draw_view_panel(frame, content);
			}
			Some(placement) => {
				self.draw_widgets(frame, content);
				let overlay = match placement {
					Placement::Popup => centered_rect(content, 50, 40),
					_ => centered_rect(content, 70, 60),
				};
				frame.render_widget(Clear, overlay);
				self.draw_view_panel(frame, overlay);
			}
			None => self.draw_widgets(frame, content),
		}

		let help = Paragraph::new(
			"q quit • enter/click gauge • ↑/↓ adjust • p pause feed • r reset • tab switch object • esc close view",
		)
		.style(Style::default().fg(Color::DarkGray));
		frame.render_widget(help, layout[2]);
	}

	fn draw_widgets(&mut self, frame: &mut Frame<'_>, area: Rect) {
		self.widget_area = Some(area);
		for entry in self.registry.iter_mut() {
			entry.widget_mut().render(frame, area);
		}
	}

	fn draw_status(&mut self, frame: &mut Frame<'_>, area: Rect) {
		let muted = Style::default().fg(Color::DarkGray);
		let mut line = Line::default();
		if self.feed.is_running() {
			let spinner = Throbber::default().style(muted).throbber_style(muted);
			line.spans.push(spinner.to_symbol_span(&self.throbber_state));
		}
		let value = self
			.bound_value()
			.map_or_else(|| "--".to_string(), |value| value.to_string());
		line.spans.push(Span::styled(
			format!(
				"{} {}/{} on object {}/{}",
				self.demo.entity,
				value,
				self.demo.capacity,
				self.bound + 1,
				self.objects.len()
			),
			muted,
		));
		frame.render_widget(Paragraph::new(line), area);
	}

	fn draw_view_panel(&self, frame: &mut Frame<'_>, area: Rect) {
		let Some(view) = self.views.current() else {
			return;
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.title(view.name.clone());
		let body = Paragraph::new(format!(
			"{} {}\n\nEsc closes this view",
			view.options.context_entity, view.options.context_guid
		))
		.alignment(Alignment::Center)
		.block(block);
		frame.render_widget(body, area);
	}
}

/// Rectangle centered in `area` covering the given percentages.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
	let vertical = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Percentage((100 - percent_y) / 2),
			Constraint::Percentage(percent_y),
			Constraint::Percentage((100 - percent_y) / 2),
		])
		.split(area);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Percentage((100 - percent_x) / 2),
			Constraint::Percentage(percent_x),
			Constraint::Percentage((100 - percent_x) / 2),
		])
		.split(vertical[1]);
	horizontal[1]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_rect_stays_inside_the_area() {
		let area = Rect::new(0, 0, 100, 40);
		let rect = centered_rect(area, 50, 40);
		assert!(rect.x >= area.x && rect.right() <= area.right());
		assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
		assert!(rect.width <= area.width / 2 + 1);
	}
}
