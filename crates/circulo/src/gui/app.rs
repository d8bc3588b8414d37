use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::stage::Stage;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::{view, window};
use crate::sys::{exec, icon};
use circulo_core::{ButtonId, Point, PressAction, Size};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub stage: Rc<RefCell<Stage>>,
    pub config: Config,
    pub visible: bool,
    pub viewport: Size,
    pub drawing_area: gtk::DrawingArea,
    ticking: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Toggle,
    Press(Point),
    Resize(Size),
    ButtonPressed(ButtonId),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Toggle => AppMsg::Toggle,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Circulo"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "circulo-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Hide);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "circulo-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(Size::new(width as f64, height as f64)));
                },

                add_controller = gtk::GestureClick {
                    connect_pressed[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Press(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root);

        let model = AppModel {
            stage: Rc::new(RefCell::new(Stage::new())),
            config,
            visible: false,
            viewport: Size::default(),
            drawing_area: gtk::DrawingArea::default(),
            ticking: Rc::new(Cell::new(false)),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.viewport = window::viewport_size(&model.drawing_area);

        let stage_draw = model.stage.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                let stage = stage_draw.borrow();
                if let Err(e) = view::draw(cr, stage.menu.scene(), &stage.images) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let button_sender = sender.clone();
        model
            .stage
            .borrow_mut()
            .menu
            .set_on_button_pressed(move |button| {
                button_sender.input(AppMsg::ButtonPressed(button.id.clone()));
            });

        model.rebuild();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(false);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.visible = true;
                self.drawing_area.queue_draw();
            }
            AppMsg::Hide => {
                self.visible = false;
            }
            AppMsg::Toggle => {
                self.visible = true;
                self.stage.borrow_mut().toggle();
                self.start_ticking();
            }
            AppMsg::Press(point) => {
                if !self.visible {
                    return;
                }
                let action = self.stage.borrow_mut().press(point);
                match action {
                    // click outside the menu dismisses the overlay
                    PressAction::Outside => self.visible = false,
                    action if action.should_redraw() => self.start_ticking(),
                    _ => {}
                }
            }
            AppMsg::Resize(size) => {
                if size != self.viewport {
                    self.viewport = size;
                    self.rebuild();
                }
            }
            AppMsg::ButtonPressed(id) => {
                log::info!("Button '{}' pressed", id);
                println!("{}", id);
                if let Some(command) = self.config.exec_for(&id)
                    && let Err(e) = exec::spawn(command)
                {
                    log::error!("Failed to run '{}': {}", command, e);
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.config = new_config;
                    self.stage.borrow_mut().images.clear();
                    icon::clear_cache();
                    self.rebuild();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn rebuild(&mut self) {
        let colors = ThemeColors::from_context(&self.drawing_area.style_context());
        let menu_config = self.config.to_menu_config(colors.accent);

        if let Err(e) = self
            .stage
            .borrow_mut()
            .rebuild(menu_config, self.viewport)
        {
            log::error!("Failed to build menu: {}", e);
        }
        self.drawing_area.queue_draw();
    }

    /// Drives the timeline from the frame clock until it runs dry.
    fn start_ticking(&self) {
        if self.ticking.replace(true) {
            return;
        }

        let stage = self.stage.clone();
        let ticking = self.ticking.clone();
        self.drawing_area.add_tick_callback(move |area, _| {
            let changed = stage.borrow_mut().advance(Instant::now());
            area.queue_draw();
            if changed {
                glib::ControlFlow::Continue
            } else {
                ticking.set(false);
                glib::ControlFlow::Break
            }
        });
    }
}
