use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::BRAND;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <style>
                {r#"
                    .legal-content {
                        min-height: 100vh;
                        background: #020617;
                        padding: 4rem 2rem;
                        color: #fff;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .legal-content h1 {
                        font-size: 2rem;
                        background: linear-gradient(90deg, #60a5fa, #c084fc);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        margin-bottom: 2.5rem;
                    }
                    .legal-content section {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        width: 100%;
                        max-width: 600px;
                        padding: 2rem;
                        margin: 1rem auto;
                        box-sizing: border-box;
                    }
                    .legal-content h2 {
                        color: #c084fc;
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                    .legal-content p, .legal-content li {
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .legal-links {
                        margin-top: 2rem;
                    }
                    .legal-links a {
                        color: #c084fc;
                        text-decoration: none;
                    }
                "#}
            </style>
            <h1>{"Политика конфиденциальности"}</h1>

            <section>
                <h2>{"1. Какие данные мы получаем"}</h2>
                <p>{"Через форму заявки мы получаем только то, что вы указали сами:"}</p>
                <ul>
                    <li>{"Имя"}</li>
                    <li>{"Email"}</li>
                    <li>{"Telegram (если указан)"}</li>
                    <li>{"Текст сообщения (если указан)"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Как данные обрабатываются"}</h2>
                <p>
                    {"Заявка передается сервису обработки форм Web3Forms, который пересылает ее нам по электронной почте. "}
                    {format!("У {} нет собственного сервера, и сайт не хранит введенные данные в браузере.", BRAND)}
                </p>
            </section>

            <section>
                <h2>{"3. Зачем они нужны"}</h2>
                <p>{"Чтобы связаться с вами и подготовить персональный план обучения. Данные не передаются третьим лицам для рекламы."}</p>
            </section>

            <section>
                <h2>{"4. Ваши права"}</h2>
                <p>{"Вы можете попросить удалить вашу заявку, ответив на любое наше письмо."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"← Вернуться на главную"}</Link<Route>>
            </div>
        </div>
    }
}
