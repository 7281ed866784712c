mod create_user_modal;
mod user_detail_page;
mod users_page;

use custdash_bridge::{notification::NotificationType, user::NewUser};
use gpui::{
    AnyView, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::{
    IconName, Side,
    sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem},
};

use crate::{
    BackendBridge,
    components::toast_layer::ToastLayer,
    entities::{DataEntities, users_entity::UsersEntity},
    views::{
        create_user_modal::{CreateUserModal, CreateUserModalEvent},
        user_detail_page::{UserDetailPage, UserDetailPageEvent},
        users_page::{UsersPage, UsersPageEvent},
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PageUi {
    Users,
    UserDetail(u64),
}

pub struct FrontendUi {
    data: DataEntities,
    active_page: PageUi,
    active_page_view: AnyView,
    create_modal: Entity<CreateUserModal>,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let create_modal = cx.new(|cx| CreateUserModal::new(window, cx));
        cx.subscribe_in(&create_modal, window, |this, _, event, _, cx| {
            if let CreateUserModalEvent::Created(record) = event {
                this.customer_created(record.clone(), cx);
            }
        })
        .detach();

        cx.observe(&data.notifications, |_, _, cx| cx.notify())
            .detach();

        let initial_view = Self::users_page(data, window, cx);
        Self {
            data: data.clone(),
            active_page: PageUi::Users,
            active_page_view: initial_view,
            create_modal,
        }
    }

    fn users_page(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> AnyView {
        let page = cx.new(|cx| UsersPage::new(data, cx));
        cx.subscribe_in(&page, window, |this, _, event, window, cx| match *event {
            UsersPageEvent::OpenUser(id) => this.change_page(PageUi::UserDetail(id), window, cx),
            UsersPageEvent::CreateUser => this
                .create_modal
                .update(cx, |modal, cx| modal.open(window, cx)),
            UsersPageEvent::Reload => {
                let bridge = cx.global::<BackendBridge>().clone();
                cx.spawn(async move |_, _| bridge.request_users().await)
                    .detach();
            }
        })
        .detach();
        page.into()
    }

    fn user_detail_page(
        &self,
        user_id: u64,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyView {
        let page = cx.new(|cx| UserDetailPage::new(user_id, &self.data, cx));
        cx.subscribe_in(&page, window, |this, _, event, window, cx| match event {
            UserDetailPageEvent::Back => this.change_page(PageUi::Users, window, cx),
        })
        .detach();
        page.into()
    }

    pub fn change_page(&mut self, page: PageUi, window: &mut Window, cx: &mut Context<Self>) {
        let new_page = match page {
            PageUi::Users => Self::users_page(&self.data, window, cx),
            PageUi::UserDetail(id) => self.user_detail_page(id, window, cx),
        };
        self.active_page = page;
        self.active_page_view = new_page;
        cx.notify();
    }

    fn customer_created(&mut self, record: NewUser, cx: &mut Context<Self>) {
        let user = self
            .data
            .users
            .update(cx, |users, cx| {
                let user = users.append_created(record);
                cx.notify();
                user
            });
        log::info!("Created customer #{} locally", user.id);

        crate::notifier(cx).push(
            format!("Customer \"{}\" created", user.name),
            NotificationType::Success,
        );
    }
}

impl Render for FrontendUi {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notifications = self.data.notifications.read(cx).active.clone();

        div()
            .relative()
            .flex()
            .size_full()
            .child(
                Sidebar::new(Side::Left)
                    .header(SidebarHeader::new().child("custdash"))
                    .child(
                        SidebarGroup::new("Navigation").child(
                            SidebarMenu::new().child(
                                SidebarMenuItem::new("Customers")
                                    .active(self.active_page == PageUi::Users)
                                    .icon(IconName::LayoutDashboard)
                                    .on_click(cx.listener(|this, _, window, cx| {
                                        this.change_page(PageUi::Users, window, cx)
                                    })),
                            ),
                        ),
                    ),
            )
            .child(div().p_5().size_full().child(self.active_page_view.clone()))
            .child(self.create_modal.clone())
            .child(ToastLayer::new(notifications))
    }
}
